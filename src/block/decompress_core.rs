//! Block decompression core — the tag-stream interpreter.
//!
//! # Security boundary
//!
//! This module is the security-critical decompression path.  Every length
//! and offset is validated against the input and output cursors before any
//! byte moves; malformed, truncated, or hostile input returns
//! `Err(Error::CorruptedData)` and never reads or writes out of bounds.  No
//! check may be elided.

use crate::block::tag::{parse_tag, Op, OpKind};
use crate::error::Error;

/// Execute the tag stream in `src`, materializing exactly `out.len()` bytes.
///
/// `src` must no longer contain the varint length prefix; the caller has
/// already sized `out` to the declared uncompressed length.  On success the
/// stream was consumed in full and `out` was written in full; any mismatch
/// between the two is corruption.
pub(crate) fn decompress_tags(src: &[u8], out: &mut [u8]) -> Result<(), Error> {
    let mut ip = 0usize; // input cursor
    let mut op = 0usize; // output cursor
    let olen = out.len();

    while ip < src.len() {
        let Op {
            kind,
            len,
            offset,
            advance,
        } = parse_tag(&src[ip..]).ok_or(Error::CorruptedData)?;
        ip += advance;

        match kind {
            OpKind::Literal => {
                // The payload must exist in full on both sides.  Lengths are
                // compared as u64: a long-form literal can claim up to 2³²
                // bytes, which may not fit the remaining usize arithmetic on
                // 32-bit hosts.
                if len > (src.len() - ip) as u64 || len > (olen - op) as u64 {
                    return Err(Error::CorruptedData);
                }
                let len = len as usize;
                out[op..op + len].copy_from_slice(&src[ip..ip + len]);
                ip += len;
                op += len;
            }
            OpKind::Copy => {
                // The reference must lie inside the bytes already produced,
                // and the copy must fit the remaining output.
                if offset == 0 || offset > op as u64 || len > (olen - op) as u64 {
                    return Err(Error::CorruptedData);
                }
                let len = len as usize;
                let offset = offset as usize;
                if offset >= len {
                    // Source and destination cannot overlap: copy in one go.
                    let (head, tail) = out.split_at_mut(op);
                    tail[..len].copy_from_slice(&head[op - offset..op - offset + len]);
                } else {
                    // Overlapping copy — the run-length case.  Replicate
                    // forward one byte at a time so byte `k` of the copy
                    // reads what byte `k − offset` of the copy wrote.
                    for i in op..op + len {
                        out[i] = out[i - offset];
                    }
                }
                op += len;
            }
        }
    }

    // The stream must produce exactly the declared number of bytes.
    if op != olen {
        return Err(Error::CorruptedData);
    }
    Ok(())
}
