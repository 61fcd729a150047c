//! Binary to hex text: contiguous lowercase hex, or an xxd-style offset dump.

use std::fmt;
use std::str::FromStr;

use crate::error::HexError;

/// Bytes per offset-dump line.
pub const BYTES_PER_LINE: usize = 16;

/// Output style for [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Style {
    /// Lowercase hex digits, two per byte, no separators or newlines.
    #[default]
    Plain,
    /// `xxd`-style lines: offset, spaced hex pairs, ASCII gloss.
    Xxd,
}

impl Style {
    pub fn name(self) -> &'static str {
        match self {
            Style::Plain => "plain",
            Style::Xxd => "xxd",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Style::Plain),
            "xxd" => Ok(Style::Xxd),
            _ => Err(HexError::InvalidStyle(s.to_string())),
        }
    }
}

/// Encode `data` in the requested style.
pub fn encode(data: &[u8], style: Style) -> String {
    match style {
        Style::Plain => encode_plain(data),
        Style::Xxd => encode_xxd(data),
    }
}

#[inline]
pub fn encode_plain(data: &[u8]) -> String {
    hex::encode(data)
}

/// One line per 16 bytes (the last may be shorter), each ending in `\n`:
///
/// ```text
/// 00000000: 89 50 4e 47 0d 0a 1a 0a 00 00 00 0d 49 48 44 52  .PNG........IHDR
/// ```
pub fn encode_xxd(data: &[u8]) -> String {
    let lines = data.len().div_ceil(BYTES_PER_LINE);
    let mut out = String::with_capacity(lines * 76);
    for (i, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        let pairs = chunk
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<Vec<_>>()
            .join(" ");
        let gloss: String = chunk
            .iter()
            .map(|&b| if (32..=126).contains(&b) { b as char } else { '.' })
            .collect();
        out.push_str(&format!(
            "{:08x}: {:<48}  {}\n",
            i * BYTES_PER_LINE,
            pairs,
            gloss
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_is_padded_to_field() {
        let line = encode_xxd(b"AB");
        assert_eq!(line, format!("00000000: 41 42{}  AB\n", " ".repeat(43)));
    }
}
