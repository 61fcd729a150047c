//! PNG start signature and IEND end marker search.

/// PNG signature: `89 50 4E 47 0D 0A 1A 0A`.
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Chunk type of the terminal PNG chunk.
pub const IEND_TAG: &[u8; 4] = b"IEND";

/// Payload end, counted from the start of the last `IEND` tag.
pub const IEND_TRAILER_LEN: usize = 12;

/// Offset of the first PNG signature in `data`.
pub fn find_signature(data: &[u8]) -> Option<usize> {
    data.windows(PNG_SIGNATURE.len())
        .position(|w| w == PNG_SIGNATURE)
        .or_else(|| starts_with_signature(data).then_some(0))
}

#[inline]
pub fn starts_with_signature(data: &[u8]) -> bool {
    data.starts_with(PNG_SIGNATURE)
}

/// Offset of the *last* `IEND` tag in `data`.
///
/// The last one is authoritative: the tag bytes can also occur inside earlier chunk data.
pub fn rfind_end_marker(data: &[u8]) -> Option<usize> {
    data.windows(IEND_TAG.len()).rposition(|w| w == IEND_TAG)
}
