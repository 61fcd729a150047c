//! Walk the chunk sequence of a recovered payload for reporting.
//! See https://www.w3.org/TR/png/#5Chunk-layout

use crate::png::crc32::png_crc;
use crate::png::signature::{starts_with_signature, IEND_TAG, PNG_SIGNATURE};
use crate::result::ChunkInfo;

/// Walk chunks from just after the signature until IEND or the end of data.
///
/// Returns the chunks seen and any warnings (CRC mismatches, chunks running past the
/// end of data, stray bytes). The payload itself is never modified.
pub fn walk_chunks(payload: &[u8]) -> (Vec<ChunkInfo>, Vec<String>) {
    let mut chunks = Vec::new();
    let mut warnings = Vec::new();
    if !starts_with_signature(payload) {
        warnings.push("Payload does not start with a PNG signature; chunks not walked".to_string());
        return (chunks, warnings);
    }

    let mut pos = PNG_SIGNATURE.len();
    while pos + 8 <= payload.len() {
        let length = u32::from_be_bytes([
            payload[pos],
            payload[pos + 1],
            payload[pos + 2],
            payload[pos + 3],
        ]);
        let kind_bytes = &payload[pos + 4..pos + 8];
        let kind = String::from_utf8_lossy(kind_bytes).into_owned();
        let data_end = (pos + 8).saturating_add(length as usize);

        if data_end.saturating_add(4) > payload.len() {
            warnings.push(format!(
                "Chunk {} at offset {} declares {} data bytes but only {} remain",
                kind,
                pos,
                length,
                payload.len() - (pos + 8)
            ));
            chunks.push(ChunkInfo {
                offset: pos,
                kind,
                length,
                crc_ok: None,
            });
            return (chunks, warnings);
        }

        let stored = u32::from_be_bytes([
            payload[data_end],
            payload[data_end + 1],
            payload[data_end + 2],
            payload[data_end + 3],
        ]);
        let computed = png_crc(&payload[pos + 4..data_end]);
        let crc_ok = stored == computed;
        if !crc_ok {
            warnings.push(format!(
                "Chunk {} at offset {}: CRC mismatch (stored {:08x}, computed {:08x})",
                kind, pos, stored, computed
            ));
        }
        chunks.push(ChunkInfo {
            offset: pos,
            kind,
            length,
            crc_ok: Some(crc_ok),
        });

        pos = data_end + 4;
        if kind_bytes == IEND_TAG {
            return (chunks, warnings);
        }
    }

    if pos < payload.len() {
        warnings.push(format!(
            "{} stray bytes at offset {} do not form a chunk header",
            payload.len() - pos,
            pos
        ));
    }
    (chunks, warnings)
}
