//! PNG payload recovery: signature search, IEND-bounded extraction and chunk walking.
//!
//! Recovery is boundary-only. Padding before the signature and after the IEND trailer is
//! dropped; corrupted bytes in between are reported (CRC) but never repaired.

mod chunks;
mod crc32;
mod extract;
mod signature;

pub use chunks::walk_chunks;
pub use crc32::png_crc;
pub use extract::{extract_payload, Extraction};
pub use signature::{
    find_signature, rfind_end_marker, starts_with_signature, IEND_TAG, IEND_TRAILER_LEN,
    PNG_SIGNATURE,
};
