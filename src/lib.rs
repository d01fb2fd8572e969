//! txt2fnt — character-set harvesting and font atlas preparation.
//!
//! # Pipeline
//!
//! ```text
//! in/text/*.{txt,xml}
//!     │  collector (xml_text for .xml)
//!     ▼
//! CharacterSet ──► classifier ──► accepted / excluded
//!                                     │
//!                                     ▼  chunk (64 chars per line)
//!                      workspace/char2chunk/*.txt
//!                                     │
//! in/ttf/*.ttf ──────────────► fontgen config (JSON) ──► external rasterizer
//! ```
//!
//! The library half exists so every stage can be exercised from integration
//! tests; the binary in `main.rs` is a thin wrapper around [`app::run`].

/// Tool version (used by the CLI `--version` output).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod chunk;
pub mod classifier;
pub mod cli;
pub mod collector;
pub mod error;
pub mod fontgen;
pub mod report;
pub mod xml_text;
