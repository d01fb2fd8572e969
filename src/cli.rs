//! Command-line interface for txt2fnt.
//!
//! Parses arguments into the [`CliOptions`] the pipeline runs on. Folder
//! locations beyond the two input folders (chunk output, atlas output, tool
//! location) are fixed conventions of the working directory, not flags;
//! tests override them by constructing `CliOptions` directly.

use crate::fontgen::{DEFAULT_FONT_SIZE, DEFAULT_OUTPUT_DIR, DEFAULT_TOOL_DIR};
use clap::Parser;
use std::path::PathBuf;

/// txt2fnt - Generate font atlas configs from text and TTF inputs
#[derive(Parser)]
#[command(name = "txt2fnt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TTF filename (in the typeface folder, with or without extension) to
    /// use for font generation
    #[arg(short, long, value_name = "NAME")]
    ttf: Option<String>,

    /// Custom output name for the .fnt file (no extension)
    #[arg(short, long = "output-name", value_name = "NAME")]
    output_name: Option<String>,

    /// Font size in pixels
    #[arg(short, long = "font-size", value_name = "PIXELS", default_value_t = DEFAULT_FONT_SIZE)]
    font_size: u32,

    /// Corpus folder containing .txt and .xml files
    #[arg(long, value_name = "DIR", default_value = "in/text")]
    text_dir: PathBuf,

    /// Folder containing .ttf typefaces
    #[arg(long, value_name = "DIR", default_value = "in/ttf")]
    ttf_dir: PathBuf,
}

/// Runtime options passed from the CLI to the pipeline.
#[derive(Clone, Debug)]
pub struct CliOptions {
    /// Requested typeface name, with or without extension.
    pub ttf: Option<String>,
    /// Output name override for the `.fnt` artifact (no extension).
    pub output_name: Option<String>,
    /// Rasterization size in pixels.
    pub font_size: u32,
    /// Corpus folder.
    pub text_dir: PathBuf,
    /// Typeface folder.
    pub ttf_dir: PathBuf,
    /// Chunk file output folder.
    pub chunk_dir: PathBuf,
    /// Atlas artifact output folder.
    pub output_dir: PathBuf,
    /// Folder holding the external rasterizer.
    pub tool_dir: PathBuf,
}

impl Default for CliOptions {
    fn default() -> Self {
        CliOptions {
            ttf: None,
            output_name: None,
            font_size: DEFAULT_FONT_SIZE,
            text_dir: PathBuf::from("in/text"),
            ttf_dir: PathBuf::from("in/ttf"),
            chunk_dir: PathBuf::from("workspace/char2chunk"),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            tool_dir: PathBuf::from(DEFAULT_TOOL_DIR),
        }
    }
}

/// Parse command-line arguments into pipeline options.
pub fn parse_options() -> CliOptions {
    let cli = Cli::parse();
    CliOptions {
        ttf: cli.ttf,
        output_name: cli.output_name,
        font_size: cli.font_size,
        text_dir: cli.text_dir,
        ttf_dir: cli.ttf_dir,
        ..CliOptions::default()
    }
}
