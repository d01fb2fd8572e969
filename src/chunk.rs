//! Fixed-width chunk file serialization.
//!
//! Chunk files are the format contract with the external rasterizer's
//! charset reader: characters concatenated with no separator, a line break
//! after every 64th character, final partial line unterminated. The width is
//! not configurable.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Characters per chunk-file line. Format contract; do not change.
pub const LINE_WIDTH: usize = 64;

/// Write `chars` to `path` in chunk-file format.
pub fn write_chunk(chars: &[char], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create chunk file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut buf = [0u8; 4];
    for (i, &c) in chars.iter().enumerate() {
        writer.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        if (i + 1) % LINE_WIDTH == 0 {
            writer.write_all(b"\n")?;
        }
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write chunk file '{}'", path.display()))?;
    Ok(())
}

/// Read a chunk file back to its character sequence, dropping the inserted
/// line breaks. Inverse of [`write_chunk`].
pub fn read_chunk(path: &Path) -> Result<Vec<char>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read chunk file '{}'", path.display()))?;
    Ok(content.chars().filter(|&c| c != '\n').collect())
}
