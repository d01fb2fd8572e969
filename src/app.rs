//! Pipeline orchestration.
//!
//! One run: scan the corpus, classify the harvested characters, persist both
//! chunk files, select a typeface, and hand the accepted chunk to the
//! external rasterizer. Runs to completion synchronously; there is no shared
//! state across steps beyond the values threaded through here.

use crate::chunk;
use crate::classifier::{self, CharacterSet};
use crate::cli::CliOptions;
use crate::collector;
use crate::error::ToolError;
use crate::fontgen::{self, GenerationRequest};
use crate::report::StatusSink;
use anyhow::{Context, Result, bail};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Run the whole pipeline for one invocation.
pub fn run(options: &CliOptions, sink: &mut dyn StatusSink) -> Result<()> {
    if let Ok(pwd) = std::env::current_dir() {
        sink.status(&format!("Present Working Directory: {}", pwd.display()));
    }

    // Harvest.
    let mut chars = CharacterSet::new();
    let scanned = collector::scan_corpus(&options.text_dir, &mut chars, sink)?;
    info!("Scanned {scanned} corpus files, {} unique characters", chars.len());

    // Classify.
    let classified = classifier::classify(&chars);
    let accepted_count = classified.accepted.len();
    let excluded_count = classified.excluded.len();

    // Persist both halves to a clean chunk folder.
    reset_dir(&options.chunk_dir)?;
    let accepted_path = options
        .chunk_dir
        .join(format!("extracted_chunk_{accepted_count}.txt"));
    let excluded_path = options
        .chunk_dir
        .join(format!("ignored_{excluded_count}.txt"));

    chunk::write_chunk(&classified.accepted, &accepted_path)?;
    chunk::write_chunk(&classified.excluded, &excluded_path)?;
    sink.status(&format!(
        "Accepted Characters ({accepted_count}): saved to {}",
        accepted_path.display()
    ));
    sink.status(&format!(
        "Excluded Characters ({excluded_count}): saved to {}",
        excluded_path.display()
    ));

    // Typeface selection.
    sink.blank();
    sink.status("=== Selecting TTF File for Font Generation ===");
    let ttf_file = select_typeface(&options.ttf_dir, options.ttf.as_deref(), sink)?;

    // Atlas generation.
    sink.blank();
    sink.status("=== Starting Font Generation ===");
    sink.status(&format!("Using Character Chunk File: {}", accepted_path.display()));
    sink.status(&format!("Using TTF File: {}", ttf_file.display()));
    match &options.output_name {
        Some(name) => sink.status(&format!("Custom FNT Output Name: {name}")),
        None => sink.status(&format!(
            "Using default FNT output name based on TTF filename. ({})",
            ttf_file
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default()
        )),
    }

    let request = GenerationRequest {
        chunk_file: &accepted_path,
        ttf_file: &ttf_file,
        output_dir: &options.output_dir,
        output_name: options.output_name.as_deref(),
        font_size: options.font_size,
        tool_dir: &options.tool_dir,
    };
    let report = fontgen::generate(&request, sink)?;

    if report.success {
        sink.status(&format!(
            "Font generation completed. Please check the {} folder.",
            options.output_dir.display()
        ));
        Ok(())
    } else {
        sink.status("Font generation failed.");
        bail!(
            "fontgen produced no artifact at '{}'",
            report.fnt_path.display()
        );
    }
}

/// Ensure `dir` exists and is empty of files (stale chunk files from a
/// previous run would otherwise accumulate alongside the new ones).
fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        for entry in
            fs::read_dir(dir).with_context(|| format!("Failed to list '{}'", dir.display()))?
        {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove '{}'", path.display()))?;
            }
        }
    } else {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create '{}'", dir.display()))?;
    }
    Ok(())
}

/// Pick the typeface to rasterize from.
///
/// Defaults to the first `.ttf` (sorted by name); `requested` may name one
/// with or without the extension. Missing resources are terminal: a missing
/// folder is created and reported, an unknown name is not substituted.
fn select_typeface(
    ttf_dir: &Path,
    requested: Option<&str>,
    sink: &mut dyn StatusSink,
) -> Result<PathBuf> {
    if !ttf_dir.exists() {
        fs::create_dir_all(ttf_dir)
            .with_context(|| format!("Failed to create '{}'", ttf_dir.display()))?;
        return Err(ToolError::TtfDirCreated {
            dir: ttf_dir.to_path_buf(),
        }
        .into());
    }

    let mut ttf_files: Vec<PathBuf> = fs::read_dir(ttf_dir)
        .with_context(|| format!("Failed to list '{}'", ttf_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case("ttf"))
        })
        .collect();
    ttf_files.sort();

    sink.status(&format!("Total TTF Files Found: {}", ttf_files.len()));
    if ttf_files.is_empty() {
        return Err(ToolError::NoTypefaces {
            dir: ttf_dir.to_path_buf(),
        }
        .into());
    }

    sink.status("Available TTF Files:");
    for (i, path) in ttf_files.iter().enumerate() {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        sink.status(&format!("{}. {name}", i + 1));
    }

    let Some(name) = requested else {
        return Ok(ttf_files[0].clone());
    };

    let with_ext = format!("{name}.ttf");
    ttf_files
        .iter()
        .find(|p| {
            p.file_name()
                .map(|f| f.to_string_lossy())
                .is_some_and(|f| f == name || f == with_ext.as_str())
        })
        .cloned()
        .ok_or_else(|| {
            ToolError::TypefaceNotFound {
                name: name.to_string(),
                dir: ttf_dir.to_path_buf(),
            }
            .into()
        })
}
