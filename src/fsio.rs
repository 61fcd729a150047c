//! File-level helpers for the CLI: reading sources, resolving and writing outputs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{HexError, Result};

/// Where decode input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeSource {
    File(PathBuf),
    Text(String),
}

impl DecodeSource {
    /// Pick the source from optional CLI values; a file wins if both are given.
    pub fn from_args(file: Option<PathBuf>, text: Option<String>) -> Result<Self> {
        match (file, text) {
            (Some(path), _) => Ok(DecodeSource::File(path)),
            (None, Some(text)) => Ok(DecodeSource::Text(text)),
            (None, None) => Err(HexError::InputMissing),
        }
    }

    /// Read the hexdump text. Whitespace-only input is [`HexError::EmptyInput`].
    pub fn read(&self) -> Result<String> {
        let text = match self {
            DecodeSource::File(path) => {
                if !path.exists() {
                    return Err(HexError::FileNotFound(path.clone()));
                }
                fs::read_to_string(path)?
            }
            DecodeSource::Text(text) => text.clone(),
        };
        if text.trim().is_empty() {
            return Err(HexError::EmptyInput);
        }
        Ok(text)
    }

    /// Resolve the output path. A bare file name lands next to the input file
    /// (file source) or in the current directory (text source); anything with a
    /// directory component is used as given.
    pub fn resolve_output(&self, output: &Path) -> Result<PathBuf> {
        if has_directory(output) {
            return Ok(output.to_path_buf());
        }
        let base = match self {
            DecodeSource::File(path) => match std::path::absolute(path)?.parent() {
                Some(dir) => dir.to_path_buf(),
                None => std::env::current_dir()?,
            },
            DecodeSource::Text(_) => std::env::current_dir()?,
        };
        Ok(base.join(output))
    }
}

fn has_directory(path: &Path) -> bool {
    path.parent().is_some_and(|p| !p.as_os_str().is_empty())
}

/// Read a whole binary file, mapping a missing file to [`HexError::FileNotFound`].
pub fn read_binary(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HexError::FileNotFound(path.to_path_buf()),
        _ => HexError::Io(e),
    })
}

/// Write `bytes` to `path`, creating missing parent directories.
/// Returns the absolute path written.
pub fn write_payload(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, bytes)?;
    Ok(std::path::absolute(path)?)
}

/// Write encoder output text to `path` as UTF-8.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}
