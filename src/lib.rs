//! # pnghex
//!
//! Round-trip conversion between PNG files (or any binary) and hexadecimal text.
//!
//! - **Encode**: bytes to either a contiguous lowercase hex string or an `xxd`-style
//!   offset dump with an ASCII gloss.
//! - **Decode**: hex text back to bytes. Input may mix both dialects line by line and
//!   may be padded with unrelated bytes; the first PNG signature and the last `IEND`
//!   chunk bound the recovered payload.
//!
//! ## Decoding pipeline
//!
//! 1. [`hexdump`] normalizes each line (offset-annotated or plain) into one hex digit
//!    stream and pairs it into bytes.
//! 2. [`png`] finds `89 50 4E 47 0D 0A 1A 0A`, drops everything before it, finds the
//!    last `IEND` tag and cuts 12 bytes after the tag's start. A payload that stops
//!    short of that point is still returned, flagged [`Completeness::Truncated`].
//!
//! ## Example
//!
//! ```no_run
//! use pnghex::{decode, encode, Style};
//!
//! let bytes = std::fs::read("image.png").unwrap();
//! let dump = encode(&bytes, Style::Xxd);
//! let report = decode(&dump).unwrap();
//! assert_eq!(report.payload, bytes);
//! ```

mod error;
mod result;
pub mod encode;
pub mod fsio;
pub mod hexdump;
pub mod png;

pub use encode::{encode, encode_plain, encode_xxd, Style};
pub use error::{HexError, Result};
pub use hexdump::{parse_hexdump, Dialect, HexDigitStream, HexLine};
pub use png::{extract_payload, Extraction, PNG_SIGNATURE};
pub use result::{ChunkInfo, Completeness, DecodeReport};

/// Knobs for [`decode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Walk the recovered chunks and check their CRCs (report only).
    pub walk_chunks: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { walk_chunks: true }
    }
}

/// Decode hexdump text into a PNG payload with default options.
#[inline]
pub fn decode(text: &str) -> Result<DecodeReport> {
    decode_with(text, &DecodeOptions::default())
}

/// Decode hexdump text into a PNG payload.
///
/// Fails on empty input, odd digit count, invalid digits, or a missing signature or
/// `IEND` tag. Truncation, CRC mismatches and chunk overruns are warnings in the report.
pub fn decode_with(text: &str, options: &DecodeOptions) -> Result<DecodeReport> {
    let stream = HexDigitStream::from_text(text);
    let offset_lines = stream.offset_lines();
    let plain_lines = stream.plain_lines();
    let bytes = stream.into_bytes()?;
    let extraction = extract_payload(&bytes)?;

    let mut warnings = Vec::new();
    if extraction.is_truncated() {
        warnings.push("PNG may be incomplete: IEND chunk appears truncated".to_string());
    }
    let chunks = if options.walk_chunks {
        let (chunks, chunk_warnings) = png::walk_chunks(extraction.payload);
        for w in &chunk_warnings {
            tracing::warn!("{}", w);
        }
        warnings.extend(chunk_warnings);
        chunks
    } else {
        Vec::new()
    };

    Ok(DecodeReport {
        payload: extraction.payload.to_vec(),
        completeness: extraction.completeness,
        leading_padding: extraction.start,
        trailing_padding: extraction.trailing,
        offset_lines,
        plain_lines,
        chunks,
        warnings,
    })
}
