//! Stream inspection without output — the length reader and the validator.
//!
//! [`is_valid`] walks the tag stream with the same cursor checks as the
//! decompressor while only accumulating the produced-byte count, so callers
//! can vet untrusted input before allocating the output buffer.

use crate::block::tag::{parse_tag, Op, OpKind};
use crate::varint;

/// Read the declared uncompressed length from the stream prefix.
///
/// Returns `None` when the varint is malformed.  Reads at most five bytes
/// and never touches the tag stream.
pub fn uncompressed_length(src: &[u8]) -> Option<u64> {
    varint::decode32(src).ok().map(|(v, _)| v as u64)
}

/// Report whether `src` would decompress successfully into a buffer sized
/// to its declared uncompressed length.
pub fn is_valid(src: &[u8]) -> bool {
    let Ok((declared, prefix)) = varint::decode32(src) else {
        return false;
    };
    let declared = declared as u64;
    let body = &src[prefix..];
    let mut ip = 0usize;
    let mut produced = 0u64;

    while ip < body.len() {
        let Some(Op {
            kind,
            len,
            offset,
            advance,
        }) = parse_tag(&body[ip..])
        else {
            return false;
        };
        ip += advance;

        match kind {
            OpKind::Literal => {
                if len > (body.len() - ip) as u64 || len > declared - produced {
                    return false;
                }
                ip += len as usize;
            }
            OpKind::Copy => {
                if offset == 0 || offset > produced || len > declared - produced {
                    return false;
                }
            }
        }
        produced += len;
    }
    produced == declared
}
