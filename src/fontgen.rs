//! Font atlas generation: config descriptor and external rasterizer
//! invocation.
//!
//! The JSON descriptor is the sole interface to the external `fontgen` tool.
//! Its field names and the order of the charset fragments are part of that
//! contract and must not drift. Baseline fragments (ASCII, full-width forms,
//! CJK punctuation) are always included so the atlas covers them even when
//! the corpus happens not to contain them.

use crate::error::ToolError;
use crate::report::StatusSink;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default location of the rasterizer executable, relative to the working
/// directory.
pub const DEFAULT_TOOL_DIR: &str = "_tools_/fontgen";

/// Default output folder for generated `.fnt`/`.png` artifacts.
pub const DEFAULT_OUTPUT_DIR: &str = "workspace/fnt";

/// Default font size when none is given on the command line.
pub const DEFAULT_FONT_SIZE: u32 = 23;

// Baseline charset fragments rasterized into every atlas, in the order the
// descriptor lists them after the corpus chunk file.
const ASCII_DIGITS: &str = "0123456789";
const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ASCII_SPACE: &str = " ";
const ASCII_PUNCTUATION: &str = "`~!@#$%^&*()-_=+[]{}\\|;:'\",<.>/?";
const FULLWIDTH_DIGITS: &str = "０１２３４５６７８９";
const FULLWIDTH_UPPERCASE: &str = "ＡＢＣＤＥＦＧＨＩＪＫＬＭＮＯＰＱＲＳＴＵＶＷＸＹＺ";
const FULLWIDTH_LOWERCASE: &str = "ａｂｃｄｅｆｇｈｉｊｋｌｍｎｏｐｑｒｓｔｕｖｗｘｙｚ";
const IDEOGRAPHIC_SPACE: &str = "\u{3000}";
const FULLWIDTH_PUNCTUATION: &str = "｀～！＠＃＄％＾＆＊（）－＿＝＋［］｛｝＼｜；：＇＂，＜．＞／？";
const CJK_PUNCTUATION: &str = "｢｣《》｟｠“”･·。｡､、…—";
const COPYRIGHT_SIGN: &str = "©";

/// Per-side glyph padding in the atlas.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Padding {
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
    pub top: u32,
}

/// Inter-glyph spacing in the atlas.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Spacing {
    pub x: u32,
    pub y: u32,
}

/// Descriptor consumed by the external rasterizer.
///
/// `charset` mixes file-path entries (resolved by the tool's charset reader)
/// with literal inline fragments; the tool distinguishes them itself.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FontAtlasConfig {
    /// Typeface input paths.
    pub inputs: Vec<String>,
    /// Output path including the `.fnt` extension.
    pub output: String,
    /// Ordered charset sources: the corpus chunk file first, then the
    /// baseline fragments.
    pub charset: Vec<String>,
    /// Distance-field size.
    #[serde(rename = "dfSize")]
    pub df_size: u32,
    /// Rasterization size in pixels.
    #[serde(rename = "fontSize")]
    pub font_size: u32,
    /// Rasterization mode; fixed to multi-channel signed distance fields.
    pub mode: String,
    /// Tool option flags.
    pub options: Vec<String>,
    pub padding: Padding,
    pub spacing: Spacing,
}

impl FontAtlasConfig {
    /// Build the descriptor for one generation request.
    ///
    /// `output_stem` is the output path without extension; `.fnt` is
    /// appended here.
    pub fn build(
        chunk_file: &Path,
        ttf_file: &Path,
        output_stem: &Path,
        font_size: u32,
    ) -> FontAtlasConfig {
        FontAtlasConfig {
            inputs: vec![ttf_file.display().to_string()],
            output: format!("{}.fnt", output_stem.display()),
            charset: vec![
                chunk_file.display().to_string(),
                ASCII_DIGITS.to_string(),
                ASCII_LETTERS.to_string(),
                ASCII_SPACE.to_string(),
                ASCII_PUNCTUATION.to_string(),
                FULLWIDTH_DIGITS.to_string(),
                FULLWIDTH_UPPERCASE.to_string(),
                FULLWIDTH_LOWERCASE.to_string(),
                IDEOGRAPHIC_SPACE.to_string(),
                FULLWIDTH_PUNCTUATION.to_string(),
                CJK_PUNCTUATION.to_string(),
                COPYRIGHT_SIGN.to_string(),
            ],
            df_size: 6,
            font_size,
            mode: "msdf".to_string(),
            options: vec!["fixwinding".to_string(), "allownonprint".to_string()],
            padding: Padding {
                bottom: 0,
                left: 0,
                right: 0,
                top: 0,
            },
            spacing: Spacing { x: 1, y: 1 },
        }
    }
}

/// One atlas-generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    /// Accepted-character chunk file.
    pub chunk_file: &'a Path,
    /// Typeface to rasterize from.
    pub ttf_file: &'a Path,
    /// Folder receiving the `.fnt`/`.png` artifacts.
    pub output_dir: &'a Path,
    /// Output name without extension; defaults to the typeface's stem.
    pub output_name: Option<&'a str>,
    /// Rasterization size in pixels.
    pub font_size: u32,
    /// Folder holding the `fontgen` executable.
    pub tool_dir: &'a Path,
}

/// Outcome of a rasterizer run that got as far as being invoked.
///
/// `success` is judged by the presence of the `.fnt` artifact on disk, not
/// by the tool's exit status. Captured output is surfaced for diagnosis.
#[derive(Debug)]
pub struct GenerationReport {
    /// Whether the expected `.fnt` artifact exists after the run.
    pub success: bool,
    /// Expected artifact path.
    pub fnt_path: PathBuf,
    /// Captured standard output of the tool.
    pub stdout: String,
    /// Captured standard error of the tool.
    pub stderr: String,
}

/// Locate the rasterizer executable under `tool_dir`.
///
/// Accepts `fontgen` or `fontgen.exe` on any platform. A missing tool folder
/// is created so the user has a place to drop the tool in, then reported as
/// a terminal error.
fn locate_executable(tool_dir: &Path) -> Result<PathBuf, ToolError> {
    #[cfg(windows)]
    let candidates = ["fontgen.exe", "fontgen"];
    #[cfg(not(windows))]
    let candidates = ["fontgen", "fontgen.exe"];

    if !tool_dir.exists() {
        let _ = fs::create_dir_all(tool_dir);
        return Err(ToolError::FontgenMissing {
            path: tool_dir.join(candidates[0]),
        });
    }

    for name in candidates {
        let candidate = tool_dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(ToolError::FontgenMissing {
        path: tool_dir.join(candidates[0]),
    })
}

/// Run the external rasterizer for one request.
///
/// Blocking call-and-wait: the tool's output is captured synchronously and
/// inspected after it exits, with no timeout or retry. A run that completes
/// without producing the `.fnt` artifact is a `GenerationReport` with
/// `success == false`, not an `Err`; only missing resources are errors.
pub fn generate(req: &GenerationRequest<'_>, sink: &mut dyn StatusSink) -> Result<GenerationReport> {
    let ttf_stem = req
        .ttf_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let output_name = req.output_name.unwrap_or(&ttf_stem);

    fs::create_dir_all(req.output_dir).with_context(|| {
        format!(
            "Failed to create output folder '{}'",
            req.output_dir.display()
        )
    })?;

    let output_stem = req.output_dir.join(output_name);
    let fnt_path = req.output_dir.join(format!("{output_name}.fnt"));
    let png_path = req.output_dir.join(format!("{output_name}.png"));

    // Stale artifacts would make the presence check lie; remove them first.
    let mut removed_stale = false;
    for stale in [&fnt_path, &png_path] {
        if stale.exists() {
            fs::remove_file(stale)
                .with_context(|| format!("Failed to remove stale artifact '{}'", stale.display()))?;
            removed_stale = true;
        }
    }
    if removed_stale {
        sink.status(&format!(
            "Deleted existing output files for clean generation. ({0}.fnt and {0}.png)",
            output_stem.display()
        ));
    }

    let config = FontAtlasConfig::build(req.chunk_file, req.ttf_file, &output_stem, req.font_size);
    let config_path = req.output_dir.join("temp_fontgen_config.json");
    let json = serde_json::to_string_pretty(&config).context("Failed to serialize fontgen config")?;
    fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config file '{}'", config_path.display()))?;

    let exe = locate_executable(req.tool_dir)?;
    debug!("fontgen executable: {}", exe.display());
    debug!("fontgen config: {}", config_path.display());

    sink.blank();
    sink.status(&format!(
        "Generating font: {} using TTF: {}",
        fnt_path.display(),
        req.ttf_file.display()
    ));

    let output = Command::new(&exe)
        .arg(&config_path)
        .output()
        .with_context(|| format!("Failed to run fontgen at '{}'", exe.display()))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    if !stdout.is_empty() {
        sink.status(stdout.trim_end());
    }
    if !stderr.is_empty() {
        sink.status(stderr.trim_end());
    }

    let success = fnt_path.exists();
    if success {
        info!("fontgen produced {}", fnt_path.display());
    } else {
        info!(
            "fontgen exited with {:?} but produced no artifact at {}",
            output.status.code(),
            fnt_path.display()
        );
    }

    Ok(GenerationReport {
        success,
        fnt_path,
        stdout,
        stderr,
    })
}
