//! Error kinds for decoding hex text and reading/writing payload files.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HexError>;

/// Everything that can stop a decode or encode.
///
/// A truncated payload is not an error: it is reported through
/// [`DecodeReport::completeness`](crate::DecodeReport) and the payload is still produced.
#[derive(Debug, Error)]
pub enum HexError {
    /// Neither a source file nor inline text was supplied.
    #[error("no input supplied: provide either a hexdump file or inline hex text")]
    InputMissing,

    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("no hex characters found in input")]
    EmptyInput,

    #[error("hex string length is odd ({0} characters); each byte requires 2 hex digits")]
    OddLength(usize),

    /// A digit pair failed validation at the byte-pairing boundary.
    #[error("invalid hex character {character:?} at digit {index}")]
    InvalidHexDigit { character: char, index: usize },

    #[error("PNG signature not found in hexdump data (expected 89504e470d0a1a0a)")]
    SignatureNotFound,

    #[error("PNG IEND chunk not found; the hexdump may be incomplete or corrupted")]
    EndMarkerNotFound,

    #[error("invalid output style {0:?}; use 'plain' or 'xxd'")]
    InvalidStyle(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl HexError {
    /// Guidance printed under the error message by the CLI.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            HexError::SignatureNotFound | HexError::EndMarkerNotFound => Some(PNG_HINT),
            HexError::EmptyInput | HexError::OddLength(_) | HexError::InvalidHexDigit { .. } => {
                Some(FORMAT_HINT)
            }
            _ => None,
        }
    }
}

const PNG_HINT: &str = "\
The hexdump does not contain valid PNG data.
A valid PNG file must:
  1. Start with signature: 89 50 4E 47 0D 0A 1A 0A (89504e470d0a1a0a in hex)
  2. Contain an IEND chunk at the end

Please check that:
  - The hexdump was generated from a valid PNG image
  - The hexdump is not corrupted or truncated
  - Padding around the PNG data is skipped automatically";

const FORMAT_HINT: &str = "\
Please ensure the hexdump contains only hexadecimal characters (0-9, a-f, A-F).
Formats supported:
  - xxd format: '00000000: 89 50 4e 47 0d 0a 1a 0a  .PNG....'
  - Raw hex:    '89504e47 0d0a1a0a' or '89504e470d0a1a0a'";
