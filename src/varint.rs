//! Little-endian base-128 varint codec for the uncompressed-length prefix.
//!
//! A Snappy stream opens with the uncompressed length encoded as a varint of
//! one to five bytes.  Each byte contributes seven low-order bits, least
//! significant group first; the high bit is set on every byte except the
//! last.

use crate::error::Error;

/// Maximum encoded size of a 32-bit varint.
pub const MAX_VARINT32_BYTES: usize = 5;

/// Write the minimal varint encoding of `v` into the head of `dst` and
/// return the number of bytes written (1–5).
///
/// `dst` must have room for at least [`MAX_VARINT32_BYTES`] bytes.
pub fn encode32(v: u32, dst: &mut [u8]) -> usize {
    let mut v = v;
    let mut i = 0;
    while v >= 0x80 {
        dst[i] = (v as u8) | 0x80;
        v >>= 7;
        i += 1;
    }
    dst[i] = v as u8;
    i + 1
}

/// Decode a varint from the head of `src`, returning the value and the
/// number of bytes consumed.
///
/// Fails with [`Error::InvalidLength`] if the stream ends before a
/// terminating byte, if the fifth byte has its continuation bit set, or if
/// the decoded value would exceed 2³² − 1.
pub fn decode32(src: &[u8]) -> Result<(u32, usize), Error> {
    let mut result: u32 = 0;
    for (i, &b) in src.iter().enumerate().take(MAX_VARINT32_BYTES) {
        let payload = (b & 0x7F) as u32;
        // The fifth byte must terminate and may only carry the four bits
        // still missing from the 32-bit value.
        if i == MAX_VARINT32_BYTES - 1 && (b >= 0x80 || payload > 0x0F) {
            return Err(Error::InvalidLength);
        }
        result |= payload << (7 * i as u32);
        if b < 0x80 {
            return Ok((result, i + 1));
        }
    }
    Err(Error::InvalidLength)
}
