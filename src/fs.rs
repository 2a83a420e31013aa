//! File system utilities.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `content` to `path` through a buffered writer.
///
/// The file is created or truncated, and the buffer is flushed explicitly so
/// a failed flush surfaces as an error instead of being lost on drop.
pub fn write_buffered(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;

    Ok(())
}
