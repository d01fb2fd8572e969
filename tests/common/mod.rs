//! Shared fixtures for integration tests.

#![allow(dead_code)]

#[cfg(unix)]
use std::fs;
#[cfg(unix)]
use std::path::Path;

/// Install a fake `fontgen` executable under `tool_dir`.
///
/// When `produce_artifact` is true the fake reads the config JSON it is
/// handed, pulls out the `output` path, and writes a stub `.fnt` file there
/// — mimicking a successful rasterizer run. Otherwise it prints to stderr
/// and exits non-zero without producing anything.
#[cfg(unix)]
pub fn install_fake_fontgen(tool_dir: &Path, produce_artifact: bool) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(tool_dir).unwrap();
    let exe = tool_dir.join("fontgen");
    let body = if produce_artifact {
        concat!(
            "#!/bin/sh\n",
            "out=$(sed -n 's/.*\"output\": \"\\([^\"]*\\)\".*/\\1/p' \"$1\")\n",
            "printf 'FNT' > \"$out\"\n",
            "echo \"fontgen wrote $out\"\n",
        )
    } else {
        "#!/bin/sh\necho 'fontgen: glyph overflow' >&2\nexit 3\n"
    };
    fs::write(&exe, body).unwrap();

    let mut perms = fs::metadata(&exe).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&exe, perms).unwrap();
}
