//! Accumulates hex digits across lines and pairs them into bytes.

use crate::error::{HexError, Result};
use crate::hexdump::line::{split_lines, Dialect, HexLine};

/// Append-only hex digit accumulator for a whole hexdump.
#[derive(Debug, Clone, Default)]
pub struct HexDigitStream {
    digits: String,
    offset_lines: usize,
    plain_lines: usize,
}

impl HexDigitStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize every line of `text` into one stream. Blank lines are skipped.
    ///
    /// Lines end at any boundary [`split_lines`] recognizes, so a dump with bare `\r`
    /// line endings parses line by line too.
    pub fn from_text(text: &str) -> Self {
        let mut stream = Self::new();
        for line in split_lines(text).filter_map(HexLine::parse) {
            stream.push_line(&line);
        }
        tracing::debug!(
            offset_lines = stream.offset_lines,
            plain_lines = stream.plain_lines,
            digits = stream.len(),
            "normalized hexdump text"
        );
        stream
    }

    pub fn push_line(&mut self, line: &HexLine<'_>) {
        match line.dialect() {
            Dialect::OffsetAnnotated => self.offset_lines += 1,
            Dialect::Plain => self.plain_lines += 1,
        }
        self.digits.extend(line.digits());
    }

    /// Number of digit characters collected so far.
    pub fn len(&self) -> usize {
        self.digits.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn offset_lines(&self) -> usize {
        self.offset_lines
    }

    pub fn plain_lines(&self) -> usize {
        self.plain_lines
    }

    /// Pair digits into bytes (`"4e"` -> `0x4E`).
    ///
    /// Fails with [`HexError::EmptyInput`], then [`HexError::OddLength`], then
    /// [`HexError::InvalidHexDigit`] for the first character outside `0-9a-fA-F`.
    pub fn into_bytes(self) -> Result<Vec<u8>> {
        let count = self.len();
        if count == 0 {
            return Err(HexError::EmptyInput);
        }
        if count % 2 != 0 {
            return Err(HexError::OddLength(count));
        }
        if let Some((index, character)) = self
            .digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(HexError::InvalidHexDigit { character, index });
        }
        hex::decode(&self.digits).map_err(|e| match e {
            hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidHexDigit {
                character: c,
                index,
            },
            hex::FromHexError::OddLength => HexError::OddLength(count),
            other => HexError::Unexpected(other.to_string()),
        })
    }
}

/// Normalize hexdump text (either dialect, mixed freely) and pair it into raw bytes.
pub fn parse_hexdump(text: &str) -> Result<Vec<u8>> {
    HexDigitStream::from_text(text).into_bytes()
}
