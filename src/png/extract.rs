//! Recover one PNG payload from a byte buffer that may carry padding on either side.

use crate::error::{HexError, Result};
use crate::png::signature::{find_signature, rfind_end_marker, IEND_TRAILER_LEN};
use crate::result::Completeness;

/// A PNG payload located inside a larger buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// Signature through `IEND` tag + 12, or to the end of the buffer when truncated.
    pub payload: &'a [u8],
    /// Offset of the signature in the source buffer.
    pub start: usize,
    /// Bytes after the IEND trailer that were dropped.
    pub trailing: usize,
    pub completeness: Completeness,
}

impl Extraction<'_> {
    pub fn is_truncated(&self) -> bool {
        self.completeness == Completeness::Truncated
    }
}

/// Locate the first PNG signature and the last IEND chunk and return the bytes between them.
///
/// Everything before the signature is padding. The payload ends [`IEND_TRAILER_LEN`]
/// bytes after the start of the `IEND` tag; bytes past that are padding too. If the
/// buffer stops short of that point the remainder is returned as-is and marked
/// [`Completeness::Truncated`].
pub fn extract_payload(data: &[u8]) -> Result<Extraction<'_>> {
    let start = find_signature(data).ok_or(HexError::SignatureNotFound)?;
    let png = &data[start..];

    let tag_pos = rfind_end_marker(png).ok_or(HexError::EndMarkerNotFound)?;
    let iend_end = tag_pos + IEND_TRAILER_LEN;

    if start > 0 {
        tracing::debug!(padding = start, "skipped bytes before PNG signature");
    }

    if png.len() < iend_end {
        tracing::warn!(
            have = png.len(),
            need = iend_end,
            "PNG may be incomplete: IEND chunk appears truncated"
        );
        return Ok(Extraction {
            payload: png,
            start,
            trailing: 0,
            completeness: Completeness::Truncated,
        });
    }

    let trailing = png.len() - iend_end;
    if trailing > 0 {
        tracing::debug!(padding = trailing, "dropped bytes after IEND chunk");
    }
    Ok(Extraction {
        payload: &png[..iend_end],
        start,
        trailing,
        completeness: Completeness::Complete,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::png::signature::PNG_SIGNATURE;

    const IEND_CHUNK: [u8; 12] = [0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];

    #[test]
    fn tag_plus_trailer_is_complete() {
        let mut v = PNG_SIGNATURE.to_vec();
        v.extend_from_slice(b"IEND");
        v.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let e = extract_payload(&v).unwrap();
        assert_eq!(e.payload, &v[..]);
        assert_eq!(e.start, 0);
        assert_eq!(e.trailing, 0);
        assert!(!e.is_truncated());
    }

    #[test]
    fn file_ending_at_crc_is_best_effort() {
        let mut v = PNG_SIGNATURE.to_vec();
        v.extend_from_slice(&IEND_CHUNK);
        let e = extract_payload(&v).unwrap();
        assert_eq!(e.payload, &v[..]);
        assert!(e.is_truncated());
    }

    #[test]
    fn missing_crc_is_truncated() {
        let mut v = PNG_SIGNATURE.to_vec();
        v.extend_from_slice(&IEND_CHUNK[..10]);
        let e = extract_payload(&v).unwrap();
        assert!(e.is_truncated());
        assert_eq!(e.payload.len(), v.len());
    }
}
