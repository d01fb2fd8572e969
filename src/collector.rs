//! Corpus scanning and character-set accumulation.
//!
//! Collection is a pure union: calls only ever add characters to the
//! caller-owned set. Whole files are read into memory per call, which is
//! adequate for this workload; streaming arbitrarily large corpora is a
//! non-goal.

use crate::classifier::CharacterSet;
use crate::report::StatusSink;
use crate::xml_text::{self, ExtractionTier};
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Fold every character of a plain-text file into `chars`.
pub fn collect_text_file(path: &Path, chars: &mut CharacterSet) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read text file '{}'", path.display()))?;
    chars.extend(content.chars());
    Ok(())
}

/// Fold every character of an XML file's text content into `chars`.
///
/// Text extraction is tolerant of malformed markup; the tier that produced
/// the text is returned so callers can see degraded extractions.
pub fn collect_xml_file(path: &Path, chars: &mut CharacterSet) -> Result<ExtractionTier> {
    let extraction = xml_text::extract_from_file(path)
        .with_context(|| format!("Failed to read XML file '{}'", path.display()))?;
    for text in &extraction.texts {
        chars.extend(text.chars());
    }
    Ok(extraction.tier)
}

/// Scan a corpus directory, folding `.txt` and `.xml` files (by extension,
/// case-insensitive) into `chars`. Other extensions are silently skipped.
/// Reports one progress line per collected file; returns how many files were
/// collected.
pub fn scan_corpus(dir: &Path, chars: &mut CharacterSet, sink: &mut dyn StatusSink) -> Result<usize> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read corpus folder '{}'", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    // read_dir order is platform-dependent; sort for stable progress output.
    paths.sort();

    let mut collected = 0;
    for path in paths {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase());
        match ext.as_deref() {
            Some("txt") => collect_text_file(&path, chars)?,
            Some("xml") => {
                collect_xml_file(&path, chars)?;
            }
            _ => {
                debug!("Skipping unrecognized corpus entry: {}", path.display());
                continue;
            }
        }
        collected += 1;

        let sample: Vec<char> = chars.iter().take(10).copied().collect();
        sink.status(&format!("File: {}", path.display()));
        sink.status(&format!("First 10 characters: {sample:?}"));
        sink.blank();
    }

    Ok(collected)
}
