//! File-level tests for tolerant XML text extraction.

use std::fs;
use tempfile::tempdir;
use txt2fnt::xml_text::{ExtractionTier, extract_from_file};

#[test]
fn test_wellformed_file_extracts_strict() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.xml");
    fs::write(&path, "<root>hello<b>world</b> tail</root>").unwrap();

    let e = extract_from_file(&path).unwrap();
    assert_eq!(e.tier, ExtractionTier::Strict);
    assert_eq!(e.texts, ["hello", "world", "tail"]);
    assert!(!e.is_degraded());
}

#[test]
fn test_malformed_file_degrades_instead_of_failing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.xml");
    fs::write(&path, "<root>hello & world<child>more & things</child></root>").unwrap();

    let e = extract_from_file(&path).unwrap();
    assert_eq!(e.tier, ExtractionTier::Untagged);
    assert_eq!(e.texts, ["hello & world", "more & things"]);
    assert!(e.is_degraded());
}

#[test]
fn test_control_bytes_are_sanitized() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ctrl.xml");
    fs::write(&path, b"<root>he\x01llo<b>\x02world</b></root>").unwrap();

    let e = extract_from_file(&path).unwrap();
    assert_eq!(e.tier, ExtractionTier::Sanitized);
    assert_eq!(e.texts, ["hello", "world"]);
}

#[test]
fn test_undecodable_bytes_are_replaced_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("enc.xml");
    // 0xFF is not valid UTF-8 anywhere.
    fs::write(&path, b"<root>caf\xFF</root>").unwrap();

    let e = extract_from_file(&path).unwrap();
    assert_eq!(e.texts.len(), 1);
    assert!(e.texts[0].starts_with("caf"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(extract_from_file(&dir.path().join("nope.xml")).is_err());
}

#[test]
fn test_no_empty_or_whitespace_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ws.xml");
    fs::write(
        &path,
        "<root>\n   <a>  padded  </a>\n   <b>   </b>\n   <c/>\n</root>",
    )
    .unwrap();

    let e = extract_from_file(&path).unwrap();
    assert_eq!(e.texts, ["padded"]);
    assert!(e.texts.iter().all(|t| !t.trim().is_empty()));
}
