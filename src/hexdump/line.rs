//! Per-line dialect detection for hexdump text.

/// Widest hex field of a 16-byte offset-dump line; anything past it is ASCII gloss.
pub const HEX_FIELD_WIDTH: usize = 48;

/// How a single input line encodes its hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `offset: hex pairs  ascii-gloss`, as produced by xxd.
    OffsetAnnotated,
    /// Hex digits mixed with arbitrary noise; only `0-9a-fA-F` is kept.
    Plain,
}

impl Dialect {
    /// A line is offset-annotated iff it contains a colon.
    #[inline]
    pub fn of(line: &str) -> Self {
        if line.contains(':') {
            Dialect::OffsetAnnotated
        } else {
            Dialect::Plain
        }
    }
}

/// Line boundaries: `\n`, `\r`, vertical tab, form feed, the file, group and record
/// separators, NEL, and the Unicode line and paragraph separators.
#[inline]
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split hexdump text into lines on every recognized line boundary.
///
/// `\r\n` yields an empty piece between the two breaks; blank pieces are dropped later
/// by [`HexLine::parse`].
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_line_break)
}

/// One non-blank line of hexdump text, split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexLine<'a> {
    dialect: Dialect,
    offset: Option<&'a str>,
    payload: &'a str,
}

impl<'a> HexLine<'a> {
    /// Split a line. Returns `None` for blank lines.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let line = raw.trim();
        if line.is_empty() {
            return None;
        }
        let dialect = Dialect::of(line);
        let (offset, payload) = match (dialect, line.split_once(':')) {
            (Dialect::OffsetAnnotated, Some((offset, rest))) => {
                (Some(offset.trim()), strip_gloss(rest.trim()))
            }
            _ => (None, line),
        };
        Some(Self {
            dialect,
            offset,
            payload,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Text before the colon, if the line is offset-annotated.
    pub fn offset(&self) -> Option<&'a str> {
        self.offset
    }

    /// The hex-bearing part of the line, with any ASCII gloss already removed.
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// Candidate hex digits this line contributes.
    ///
    /// Offset-annotated payloads only lose their spaces; anything else left in them
    /// is rejected later when digits are paired into bytes.
    pub fn digits(&self) -> impl Iterator<Item = char> + 'a {
        let dialect = self.dialect();
        self.payload.chars().filter(move |&c| match dialect {
            Dialect::OffsetAnnotated => c != ' ',
            Dialect::Plain => c.is_ascii_hexdigit(),
        })
    }
}

/// Cut the ASCII gloss off an offset-dump payload: at the first run of two spaces,
/// or else after [`HEX_FIELD_WIDTH`] characters.
fn strip_gloss(candidate: &str) -> &str {
    if let Some(i) = candidate.find("  ") {
        return &candidate[..i];
    }
    match candidate.char_indices().nth(HEX_FIELD_WIDTH) {
        Some((i, _)) => &candidate[..i],
        None => candidate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gloss_cut_at_double_space() {
        assert_eq!(strip_gloss("8950 4e47  .PNG"), "8950 4e47");
    }

    #[test]
    fn gloss_cut_at_field_width() {
        let long = "a".repeat(60);
        assert_eq!(strip_gloss(&long).len(), HEX_FIELD_WIDTH);
        assert_eq!(strip_gloss("0d0a 1a0a"), "0d0a 1a0a");
    }

    #[test]
    fn splits_on_every_line_boundary() {
        let pieces: Vec<&str> = split_lines("a\rb\r\nc\x0cd\u{2028}e\x1df")
            .filter(|p| !p.is_empty())
            .collect();
        assert_eq!(pieces, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn field_width_counts_chars_not_bytes() {
        let s = format!("{}é{}", "a".repeat(47), "b".repeat(5));
        assert_eq!(strip_gloss(&s).chars().count(), HEX_FIELD_WIDTH);
    }
}
