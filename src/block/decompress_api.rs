//! Public decompression entry points.

use crate::block::decompress_core::decompress_tags;
use crate::error::Error;
use crate::varint;

/// Decompress `src` into `dst`, returning the number of bytes written.
///
/// `dst` must be at least as large as the stream's declared uncompressed
/// length — callers usually size it via
/// [`uncompressed_length`](crate::uncompressed_length) — and exactly that
/// many bytes are written.  Fails with [`Error::InvalidLength`] on a
/// malformed prefix, [`Error::InsufficientBuffer`] when the declared length
/// exceeds `dst.len()`, and [`Error::CorruptedData`] on any tag-grammar or
/// bounds violation.  On error, a prefix of `dst` may already have been
/// overwritten.
pub fn decompress(src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    let (declared, prefix) = varint::decode32(src)?;
    let declared = declared as usize;
    if declared > dst.len() {
        return Err(Error::InsufficientBuffer);
    }
    decompress_tags(&src[prefix..], &mut dst[..declared])?;
    Ok(declared)
}

/// Decompress `src` into a freshly allocated `Vec` sized from the stream's
/// declared length.
///
/// The declared length is attacker-controlled: callers handling untrusted
/// input should bound it via
/// [`uncompressed_length`](crate::uncompressed_length) before letting this
/// allocate.
pub fn decompress_to_vec(src: &[u8]) -> Result<Vec<u8>, Error> {
    let (declared, prefix) = varint::decode32(src)?;
    let mut dst = vec![0u8; declared as usize];
    decompress_tags(&src[prefix..], &mut dst)?;
    Ok(dst)
}
