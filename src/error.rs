//! Typed error variants for txt2fnt.
//!
//! Only resource-availability problems are modeled here: per the tool's
//! propagation policy, malformed corpus input is absorbed by the tolerant
//! extraction tiers in [`crate::xml_text`] and never becomes an error, while
//! a rasterizer run that completes without producing its artifact is a
//! [`crate::fontgen::GenerationReport`] with `success == false`, not an
//! `Err`. Everything below is terminal for the run.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a txt2fnt run.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The typeface directory did not exist. It has been created so the
    /// user only needs to drop `.ttf` files in and re-run.
    #[error("typeface folder created at '{dir}' — add .ttf files and run again")]
    TtfDirCreated {
        /// Directory that was just created.
        dir: PathBuf,
    },

    /// The typeface directory exists but contains no `.ttf` files.
    #[error("no .ttf files found in '{dir}'")]
    NoTypefaces {
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// A typeface was requested by name but is not present.
    #[error("typeface '{name}' not found in '{dir}'")]
    TypefaceNotFound {
        /// Name as given on the command line (with or without extension).
        name: String,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// The external rasterizer executable is absent.
    #[error("fontgen executable not found at '{path}' — ensure the tool is present")]
    FontgenMissing {
        /// Location where the executable was expected.
        path: PathBuf,
    },
}
