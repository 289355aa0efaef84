//! Whole-file text I/O: read entire file, write entire file.
//!
//! Writes never truncate the target in place. The new content goes to a
//! temporary file in the same directory and is renamed over the original,
//! so a failure mid-write leaves the old file intact.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{CliError, Result};

/// Encoding a file was read with, and will be written back with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// UTF-8, the preferred encoding.
    Utf8,
    /// Latin-1 fallback for files that fail UTF-8 decoding.
    Latin1,
}

impl TextEncoding {
    /// Human-readable label for status lines.
    pub fn label(self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }
}

/// Reads a whole file as UTF-8, with no fallback.
pub fn read_text_utf8(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| CliError::Encoding(path.to_path_buf()))
}

/// Reads a whole file as UTF-8, falling back to Latin-1 on decode failure.
pub fn read_text_with_fallback(path: &Path) -> Result<(String, TextEncoding)> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok((text, TextEncoding::Utf8)),
        Err(err) => {
            log::debug!("{}: not valid UTF-8, reading as Latin-1", path.display());
            Ok((decode_latin1(err.as_bytes()), TextEncoding::Latin1))
        }
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Latin1 => text
            .chars()
            .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
            .collect(),
    }
}

/// Writes `text` to `path` atomically: temp file in the same directory,
/// then rename over the target.
pub fn write_text_atomic(path: &Path, text: &str, encoding: TextEncoding) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(&encode(text, encoding))?;
    tmp.persist(path).map_err(|err| CliError::Io(err.error))?;
    Ok(())
}

/// Saves `text` under the sibling `.bak` name and returns that path.
pub fn write_backup(path: &Path, text: &str, encoding: TextEncoding) -> Result<PathBuf> {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    let backup = PathBuf::from(name);
    write_text_atomic(&backup, text, encoding)?;
    Ok(backup)
}
