//! Block compression — the fragment compressor and its driver.
//!
//! The driver writes the varint length prefix and feeds consecutive 64 KiB
//! fragments to [`compress_fragment`], which runs the hash-driven match
//! search.  The search uses an adaptive stride: the further the current
//! literal run has grown without a match, the more bytes each probe skips,
//! so incompressible regions are crossed in amortized linear time.

use crate::block::tag::{emit_copy, emit_literal};
use crate::block::types::{
    find_match_length, hash_bytes, load_u32_le, table_size_for, INPUT_MARGIN, MAX_COPY_OFFSET,
    MAX_FRAGMENT_SIZE, MAX_HASH_TABLE_SIZE, MAX_INPUT_SIZE, MIN_MATCH,
};
use crate::error::Error;
use crate::varint;

// ─────────────────────────────────────────────────────────────────────────────
// Options
// ─────────────────────────────────────────────────────────────────────────────

/// Compression level requested by the caller.
///
/// `Better` is reserved for a future slower, higher-ratio encoder and
/// currently selects the same code path as `Fast`; the output stays
/// format-compliant either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    #[default]
    Fast,
    Better,
}

// ─────────────────────────────────────────────────────────────────────────────
// Size bound
// ─────────────────────────────────────────────────────────────────────────────

/// Worst-case compressed size for `input_len` bytes of input.
///
/// An upper bound for every conforming encoder: a stream produced by
/// [`compress`] never exceeds it.
#[inline]
pub fn max_compressed_length(input_len: usize) -> usize {
    32 + input_len + input_len / 6
}

// ─────────────────────────────────────────────────────────────────────────────
// One-shot public API
// ─────────────────────────────────────────────────────────────────────────────

/// Compress `src` into `dst`, returning the number of bytes written.
///
/// `dst` must hold at least [`max_compressed_length`]`(src.len())` bytes;
/// anything smaller fails with [`Error::InsufficientBuffer`] before a byte
/// is written.  Inputs longer than 2³² − 1 bytes fail with
/// [`Error::InputTooLarge`].  Empty input produces the single byte `0x00`.
pub fn compress(src: &[u8], dst: &mut [u8], level: CompressionLevel) -> Result<usize, Error> {
    match level {
        // `Better` is reserved; both levels share the fast encoder.
        CompressionLevel::Fast | CompressionLevel::Better => compress_fast(src, dst),
    }
}

/// Compress `src` into a freshly allocated `Vec` sized to the worst case and
/// trimmed to the bytes written.
pub fn compress_to_vec(src: &[u8]) -> Result<Vec<u8>, Error> {
    let mut dst = vec![0u8; max_compressed_length(src.len())];
    let written = compress(src, &mut dst, CompressionLevel::Fast)?;
    dst.truncate(written);
    Ok(dst)
}

fn compress_fast(src: &[u8], dst: &mut [u8]) -> Result<usize, Error> {
    if src.len() as u64 > MAX_INPUT_SIZE {
        return Err(Error::InputTooLarge);
    }
    if dst.len() < max_compressed_length(src.len()) {
        return Err(Error::InsufficientBuffer);
    }

    let mut d = varint::encode32(src.len() as u32, dst);

    // One table outlives the whole call; each fragment re-zeroes the slots
    // it will address, so positions never leak across fragments.
    let mut table = [0u16; MAX_HASH_TABLE_SIZE];
    for fragment in src.chunks(MAX_FRAGMENT_SIZE) {
        d += compress_fragment(fragment, &mut dst[d..], &mut table);
    }
    Ok(d)
}

// ─────────────────────────────────────────────────────────────────────────────
// Fragment compressor
// ─────────────────────────────────────────────────────────────────────────────

/// Compress a single fragment of at most 64 KiB, writing its tag stream to
/// the head of `dst` and returning the number of bytes written.
///
/// `dst` must be large enough for the worst-case encoding of the fragment;
/// the driver's `max_compressed_length` check guarantees it.  `table` slots
/// hold fragment-relative positions of recent 4-byte windows; slot value
/// zero means "empty", which is unambiguous because position 0 is never
/// recorded — the opening literal always covers it.
fn compress_fragment(
    input: &[u8],
    dst: &mut [u8],
    table: &mut [u16; MAX_HASH_TABLE_SIZE],
) -> usize {
    let n = input.len();
    debug_assert!(n <= MAX_FRAGMENT_SIZE);
    let mut d = 0;

    // Too short to hold a 4-byte match: one literal covers everything.
    if n < MIN_MATCH {
        if n > 0 {
            d = emit_literal(dst, input);
        }
        return d;
    }

    let table_size = table_size_for(n);
    let shift = 32 - table_size.trailing_zeros();
    table[..table_size].fill(0);

    // First byte not yet covered by an emitted operation.
    let mut next_emit = 0usize;
    // First position the match scan will probe.
    let mut next_ip = 1usize;
    // Probes stop here so every 4-byte window load and the 8-byte loads of
    // the match extension stay inside the fragment.
    let ip_limit = n.saturating_sub(INPUT_MARGIN);

    'main: loop {
        // ── Find a match ─────────────────────────────────────────────────
        // The stride grows with the distance scanned since `next_emit`:
        // one extra skipped byte per 32 bytes of failed probing.
        let mut ip = next_ip;
        let candidate = loop {
            let bytes_skipped = ip - next_emit;
            let skip = bytes_skipped >> 5;
            next_ip = ip + 1 + skip;
            if next_ip > ip_limit {
                break 'main;
            }
            let word = load_u32_le(input, ip);
            let h = hash_bytes(word, shift) as usize;
            let candidate = table[h] as usize;
            table[h] = ip as u16;

            // Reject empty slots, stale windows, and (guarded, though it
            // cannot happen within one fragment) too-distant candidates.
            if candidate != 0
                && ip - candidate <= MAX_COPY_OFFSET
                && load_u32_le(input, candidate) == word
            {
                break candidate;
            }
            ip = next_ip;
        };

        // ── Emit the pending literal run ─────────────────────────────────
        // Never empty: the scan starts at least one byte past `next_emit`.
        debug_assert!(ip > next_emit);
        d += emit_literal(&mut dst[d..], &input[next_emit..ip]);

        // ── Emit the copy ────────────────────────────────────────────────
        // The first four bytes already matched; extend as far as the
        // fragment allows.
        let matched =
            MIN_MATCH + find_match_length(input, candidate + MIN_MATCH, ip + MIN_MATCH);
        d += emit_copy(&mut dst[d..], ip - candidate, matched);
        ip += matched;
        next_emit = ip;

        if ip >= ip_limit {
            break;
        }
        // Seed the slot straddling the match end so the next scan can link
        // back across it.  This, plus the per-probe insert above, is the
        // only lookahead seeding.
        let h = hash_bytes(load_u32_le(input, ip - 1), shift) as usize;
        table[h] = (ip - 1) as u16;
        next_ip = ip + 1;
    }

    // ── Trailing literal ─────────────────────────────────────────────────
    if next_emit < n {
        d += emit_literal(&mut dst[d..], &input[next_emit..n]);
    }
    d
}
