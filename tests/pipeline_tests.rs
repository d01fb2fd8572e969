//! End-to-end pipeline tests: corpus → classification → chunk files →
//! typeface selection → (fake) rasterizer.

mod common;

use std::fs;
use tempfile::{TempDir, tempdir};
use txt2fnt::chunk::read_chunk;
use txt2fnt::cli::CliOptions;
use txt2fnt::error::ToolError;
use txt2fnt::report::MemorySink;

/// Build a working directory with a small mixed corpus and one typeface.
///
/// Corpus characters: letters `a b t i l x`, digit `1`, space, `&`, a tab
/// (dropped by the skip rule), and the CJK ideographs `梁 犬 猫 語`.
fn fixture() -> (TempDir, CliOptions) {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let text_dir = root.join("in/text");
    fs::create_dir_all(&text_dir).unwrap();
    fs::write(text_dir.join("a.txt"), "ab1 \t梁").unwrap();
    fs::write(text_dir.join("b.xml"), "<root>犬<b>猫</b> tail</root>").unwrap();
    // Malformed: unescaped ampersand forces the untagged extraction tier.
    fs::write(text_dir.join("c.xml"), "<root>x & 語</root>").unwrap();
    // Unrecognized extension, must be skipped.
    fs::write(text_dir.join("notes.md"), "ZZZZ").unwrap();

    let ttf_dir = root.join("in/ttf");
    fs::create_dir_all(&ttf_dir).unwrap();
    fs::write(ttf_dir.join("sample.ttf"), b"ttf").unwrap();

    let options = CliOptions {
        text_dir,
        ttf_dir,
        chunk_dir: root.join("workspace/char2chunk"),
        output_dir: root.join("workspace/fnt"),
        tool_dir: root.join("_tools_/fontgen"),
        ..CliOptions::default()
    };
    (dir, options)
}

fn run(options: &CliOptions) -> (anyhow::Result<()>, MemorySink) {
    let mut sink = MemorySink::default();
    let result = txt2fnt::app::run(options, &mut sink);
    (result, sink)
}

#[cfg(unix)]
#[test]
fn test_full_pipeline_produces_chunks_and_atlas() {
    let (_dir, options) = fixture();
    common::install_fake_fontgen(&options.tool_dir, true);

    let (result, sink) = run(&options);
    result.unwrap();

    // Accepted: the four CJK ideographs, sorted by code point.
    let accepted_path = options.chunk_dir.join("extracted_chunk_4.txt");
    assert_eq!(read_chunk(&accepted_path).unwrap(), ['梁', '犬', '猫', '語']);

    // Excluded: space & 1 a b i l t x — nine covered characters; the tab
    // appears nowhere.
    let excluded_path = options.chunk_dir.join("ignored_9.txt");
    assert_eq!(
        read_chunk(&excluded_path).unwrap(),
        [' ', '&', '1', 'a', 'b', 'i', 'l', 't', 'x']
    );

    // The atlas artifact was produced from the accepted chunk.
    assert!(options.output_dir.join("sample.fnt").exists());
    assert!(sink.lines.iter().any(|l| l.contains("Accepted Characters (4)")));
    assert!(sink.lines.iter().any(|l| l.contains("Font generation completed")));
}

#[cfg(unix)]
#[test]
fn test_rerun_cleans_previous_chunk_files() {
    let (_dir, options) = fixture();
    common::install_fake_fontgen(&options.tool_dir, true);

    fs::create_dir_all(&options.chunk_dir).unwrap();
    fs::write(options.chunk_dir.join("extracted_chunk_999.txt"), "stale").unwrap();

    let (result, _) = run(&options);
    result.unwrap();

    assert!(!options.chunk_dir.join("extracted_chunk_999.txt").exists());
    assert!(options.chunk_dir.join("extracted_chunk_4.txt").exists());
}

#[cfg(unix)]
#[test]
fn test_failed_generation_exits_with_error() {
    let (_dir, options) = fixture();
    common::install_fake_fontgen(&options.tool_dir, false);

    let (result, sink) = run(&options);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("no artifact"));
    assert!(sink.lines.iter().any(|l| l.contains("Font generation failed.")));

    // Chunk files were still written: classification output survives a
    // rasterizer failure.
    assert!(options.chunk_dir.join("extracted_chunk_4.txt").exists());
}

#[test]
fn test_missing_tool_halts_after_chunks() {
    let (_dir, options) = fixture();

    let (result, _) = run(&options);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ToolError>(),
        Some(ToolError::FontgenMissing { .. })
    ));
}

#[test]
fn test_missing_ttf_dir_is_created_and_reported() {
    let (dir, mut options) = fixture();
    options.ttf_dir = dir.path().join("in/ttf_missing");

    let (result, _) = run(&options);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ToolError>(),
        Some(ToolError::TtfDirCreated { .. })
    ));
    assert!(options.ttf_dir.is_dir());
}

#[test]
fn test_unknown_typeface_name_is_terminal() {
    let (_dir, mut options) = fixture();
    options.ttf = Some("missing_font".to_string());

    let (result, _) = run(&options);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ToolError>(),
        Some(ToolError::TypefaceNotFound { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_typeface_selected_by_bare_name() {
    let (_dir, mut options) = fixture();
    fs::write(options.ttf_dir.join("other.ttf"), b"ttf").unwrap();
    options.ttf = Some("other".to_string());
    common::install_fake_fontgen(&options.tool_dir, true);

    let (result, sink) = run(&options);
    result.unwrap();
    assert!(options.output_dir.join("other.fnt").exists());
    assert!(sink.lines.iter().any(|l| l.contains("other.ttf")));
}

#[cfg(unix)]
#[test]
fn test_custom_output_name_flows_through() {
    let (_dir, mut options) = fixture();
    options.output_name = Some("game_font".to_string());
    common::install_fake_fontgen(&options.tool_dir, true);

    let (result, sink) = run(&options);
    result.unwrap();
    assert!(options.output_dir.join("game_font.fnt").exists());
    assert!(
        sink.lines
            .iter()
            .any(|l| l.contains("Custom FNT Output Name: game_font"))
    );
}

#[cfg(unix)]
#[test]
fn test_empty_corpus_still_writes_empty_chunks() {
    let (dir, mut options) = fixture();
    let empty = dir.path().join("in/empty");
    fs::create_dir_all(&empty).unwrap();
    options.text_dir = empty;
    common::install_fake_fontgen(&options.tool_dir, true);

    let (result, _) = run(&options);
    result.unwrap();

    let accepted = options.chunk_dir.join("extracted_chunk_0.txt");
    assert!(accepted.exists());
    assert!(read_chunk(&accepted).unwrap().is_empty());
}

#[test]
fn test_blocked_before_tool_when_no_typefaces() {
    let (_dir, options) = fixture();
    for entry in fs::read_dir(&options.ttf_dir).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }

    let (result, _) = run(&options);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ToolError>(),
        Some(ToolError::NoTypefaces { .. })
    ));
}
