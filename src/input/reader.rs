use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub struct InputReader;

impl InputReader {
    /// Reads the whole source file into memory.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
    pub fn read(path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
