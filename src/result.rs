//! Decode result types: recovered payload, completeness verdict and chunk details.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Whether the recovered payload reaches 12 bytes past the start of the `IEND` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Completeness {
    /// Signature through `IEND` tag + 12 are all present.
    Complete,
    /// `IEND` was found but the data ends before tag + 12; the payload is best-effort.
    Truncated,
}

/// One PNG chunk seen while walking the recovered payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChunkInfo {
    /// Offset of the chunk's length field within the payload.
    pub offset: usize,
    /// Four-character chunk type (lossy if not ASCII).
    pub kind: String,
    /// Declared data length.
    pub length: u32,
    /// `None` when the chunk runs past the end of the payload and has no CRC to check.
    pub crc_ok: Option<bool>,
}

/// Result of decoding hex text into a PNG payload.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DecodeReport {
    /// Recovered bytes, signature through `IEND` tag + 12 (or to end of data when truncated).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub payload: Vec<u8>,
    pub completeness: Completeness,
    /// Bytes discarded before the signature.
    pub leading_padding: usize,
    /// Bytes discarded after the IEND trailer.
    pub trailing_padding: usize,
    /// Input lines handled as offset-annotated (xxd) lines.
    pub offset_lines: usize,
    /// Input lines handled as plain hex lines.
    pub plain_lines: usize,
    /// Chunks walked in the payload (empty when chunk walking is disabled).
    pub chunks: Vec<ChunkInfo>,
    /// Non-fatal problems: truncation, CRC mismatches, chunk overruns.
    pub warnings: Vec<String>,
}

impl DecodeReport {
    /// Payload size in bytes.
    pub fn size_bytes(&self) -> usize {
        self.payload.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.completeness == Completeness::Truncated
    }

    /// Lowercase hex of the first (up to) eight payload bytes.
    pub fn signature_hex(&self) -> String {
        let n = self.payload.len().min(8);
        hex::encode(&self.payload[..n])
    }
}
