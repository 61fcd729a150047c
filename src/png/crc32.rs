//! CRC-32 (ISO 3309 / ITU-T V.42) as used by PNG chunk trailers.

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
    let mut out = [0; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            if (c & 1) != 0 {
                c = 0xEDB8_8320_u32 ^ (c >> 1);
            } else {
                c >>= 1;
            }
            k += 1;
        }
        out[n] = c;
        n += 1;
    }
    out
}

/// CRC of a chunk's type and data bytes, in the order they appear in the file.
pub fn png_crc(bytes: &[u8]) -> u32 {
    let mut crc = u32::MAX;
    for &byte in bytes {
        let i = (crc ^ u32::from(byte)) as u8 as usize;
        crc = CRC_TABLE[i] ^ (crc >> 8);
    }
    crc ^ u32::MAX
}
