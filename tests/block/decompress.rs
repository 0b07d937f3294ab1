// Unit tests for block decompression.
//
// Hand-crafted streams exercise every tag form and every mandatory check:
//   - literals (short and long form), copy-1/2/4, overlapping copies
//   - offset and length violations → CorruptedData
//   - malformed prefixes → InvalidLength
//   - undersized output → InsufficientBuffer
//   - cursor agreement at stream end

use snappy::block::decompress_api::{decompress, decompress_to_vec};
use snappy::error::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Hand-crafted streams (varint prefix included)
// ─────────────────────────────────────────────────────────────────────────────

// Declared length 0, no tags.
const STREAM_EMPTY: &[u8] = &[0x00];

// Declared length 1, literal "A".
const STREAM_A: &[u8] = &[0x01, 0x00, b'A'];

// Declared length 5: literal "Hello".
const STREAM_HELLO: &[u8] = &[0x05, 4 << 2, b'H', b'e', b'l', b'l', b'o'];

// Declared length 5: literal 'a', then copy-1 offset 1 length 4 — the
// canonical self-extending run.
const STREAM_RUN: &[u8] = &[0x05, 0x00, b'a', 0b000_000_01, 0x01];

// Declared length 12: literal "abcd", copy-1 offset 4 length 8.
const STREAM_ABCD: &[u8] = &[0x0C, 3 << 2, b'a', b'b', b'c', b'd', 4 << 2 | 0b01, 0x04];

// Declared length 10: literal "abcde", copy-2 offset 5 length 5.
const STREAM_COPY2: &[u8] = &[
    0x0A, 4 << 2, b'a', b'b', b'c', b'd', b'e', 4 << 2 | 0b10, 0x05, 0x00,
];

// Declared length 10: literal "abcde", copy-4 offset 5 length 5.
const STREAM_COPY4: &[u8] = &[
    0x0A, 4 << 2, b'a', b'b', b'c', b'd', b'e', 4 << 2 | 0b11, 0x05, 0x00, 0x00, 0x00,
];

// ─────────────────────────────────────────────────────────────────────────────
// Happy paths
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_stream_into_empty_buffer() {
    let mut dst = [0u8; 0];
    assert_eq!(decompress(STREAM_EMPTY, &mut dst), Ok(0));
}

#[test]
fn empty_stream_into_larger_buffer_writes_nothing() {
    let mut dst = [0xAAu8; 4];
    assert_eq!(decompress(STREAM_EMPTY, &mut dst), Ok(0));
    assert_eq!(dst, [0xAA; 4]);
}

#[test]
fn single_literal() {
    let mut dst = [0u8; 1];
    assert_eq!(decompress(STREAM_A, &mut dst), Ok(1));
    assert_eq!(&dst, b"A");
}

#[test]
fn five_literals() {
    let mut dst = [0u8; 5];
    assert_eq!(decompress(STREAM_HELLO, &mut dst), Ok(5));
    assert_eq!(&dst, b"Hello");
}

#[test]
fn overlapping_copy_extends_run() {
    // Byte k of the copy must read what byte k − 1 wrote.
    let mut dst = [0u8; 5];
    assert_eq!(decompress(STREAM_RUN, &mut dst), Ok(5));
    assert_eq!(&dst, b"aaaaa");
}

#[test]
fn copy1_back_reference() {
    let mut dst = [0u8; 12];
    assert_eq!(decompress(STREAM_ABCD, &mut dst), Ok(12));
    assert_eq!(&dst, b"abcdabcdabcd");
}

#[test]
fn copy2_back_reference() {
    let mut dst = [0u8; 10];
    assert_eq!(decompress(STREAM_COPY2, &mut dst), Ok(10));
    assert_eq!(&dst, b"abcdeabcde");
}

#[test]
fn copy4_back_reference() {
    // The decoder accepts copy-4 even though this encoder never emits it.
    let mut dst = [0u8; 10];
    assert_eq!(decompress(STREAM_COPY4, &mut dst), Ok(10));
    assert_eq!(&dst, b"abcdeabcde");
}

#[test]
fn long_form_literal() {
    // 0xF0 == tag 60: one follow-on byte carries length − 1 == 69.
    let mut stream = vec![70, 60 << 2, 69];
    stream.extend(std::iter::repeat(b'q').take(70));
    let mut dst = [0u8; 70];
    assert_eq!(decompress(&stream, &mut dst), Ok(70));
    assert!(dst.iter().all(|&b| b == b'q'));
}

#[test]
fn oversized_output_buffer_is_accepted() {
    // Only the declared number of bytes is written and reported.
    let mut dst = [0x55u8; 32];
    assert_eq!(decompress(STREAM_ABCD, &mut dst), Ok(12));
    assert_eq!(&dst[..12], b"abcdabcdabcd");
    assert!(dst[12..].iter().all(|&b| b == 0x55));
}

#[test]
fn decompress_to_vec_sizes_from_prefix() {
    assert_eq!(decompress_to_vec(STREAM_ABCD).unwrap(), b"abcdabcdabcd");
    assert_eq!(decompress_to_vec(STREAM_EMPTY).unwrap(), b"");
}

#[test]
fn alternating_literals_and_copies() {
    // "abab" + copy(4,4) + "zz" + copy(2,2) → "ababababzzzz"
    let stream = [
        0x0C, // declared 12
        3 << 2,
        b'a',
        b'b',
        b'a',
        b'b',
        0b01, // copy-1 len 4 offset 4
        0x04,
        1 << 2, // literal "zz"
        b'z',
        b'z',
        1 << 2 | 0b10, // copy-2 len 2 offset 2
        0x02,
        0x00,
    ];
    let mut dst = [0u8; 12];
    assert_eq!(decompress(&stream, &mut dst), Ok(12));
    assert_eq!(&dst, b"ababababzzzz");
}

// ─────────────────────────────────────────────────────────────────────────────
// Corruption — offsets
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn copy_offset_one_past_written_is_rejected() {
    // After one literal byte, a copy with offset 2 == op + 1 reaches before
    // the start of the output.
    let stream = [0x05, 0x00, b'a', 0b01, 0x02];
    let mut dst = [0u8; 5];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn copy_offset_zero_is_rejected() {
    let stream = [0x05, 0x00, b'a', 0b01, 0x00];
    let mut dst = [0u8; 5];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn copy_before_any_output_is_rejected() {
    // First tag is a copy: nothing has been produced yet.
    let stream = [0x04, 0b01, 0x01];
    let mut dst = [0u8; 4];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

// ─────────────────────────────────────────────────────────────────────────────
// Corruption — lengths and truncation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn literal_payload_truncated() {
    // Literal claims 5 bytes, stream carries 3.
    let stream = [0x05, 4 << 2, b'x', b'y', b'z'];
    let mut dst = [0u8; 5];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn literal_overruns_declared_length() {
    // Declared 2, literal of 5.
    let stream = [0x02, 4 << 2, b'a', b'b', b'c', b'd', b'e'];
    let mut dst = [0u8; 2];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn copy_overruns_declared_length() {
    // Declared 5: "abcd" then a copy of 8 would produce 12.
    let stream = [0x05, 3 << 2, b'a', b'b', b'c', b'd', 4 << 2 | 0b01, 0x04];
    let mut dst = [0u8; 5];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn tag_follow_on_truncated() {
    // copy-2 missing its second offset byte at stream end.
    let stream = [0x08, 3 << 2, b'a', b'b', b'c', b'd', 3 << 2 | 0b10, 0x04];
    let mut dst = [0u8; 8];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn stream_ends_short_of_declared_length() {
    // Declared 8, tags only produce 4.
    let stream = [0x08, 3 << 2, b'a', b'b', b'c', b'd'];
    let mut dst = [0u8; 8];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn trailing_garbage_after_completion() {
    // Declared 1 satisfied, then one more tag byte remains.
    let stream = [0x01, 0x00, b'A', 0x00];
    let mut dst = [0u8; 1];
    assert_eq!(decompress(&stream, &mut dst), Err(Error::CorruptedData));
}

#[test]
fn empty_input_is_invalid() {
    let mut dst = [0u8; 1];
    assert_eq!(decompress(&[], &mut dst), Err(Error::InvalidLength));
}

// ─────────────────────────────────────────────────────────────────────────────
// Prefix and buffer errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn malformed_varint_prefix() {
    let mut dst = [0u8; 16];
    assert_eq!(
        decompress(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00], &mut dst),
        Err(Error::InvalidLength)
    );
}

#[test]
fn truncated_varint_prefix() {
    let mut dst = [0u8; 16];
    assert_eq!(decompress(&[0x80], &mut dst), Err(Error::InvalidLength));
}

#[test]
fn output_smaller_than_declared() {
    let mut dst = [0u8; 4];
    assert_eq!(
        decompress(STREAM_HELLO, &mut dst),
        Err(Error::InsufficientBuffer)
    );
}

#[test]
fn error_display_strings_are_stable() {
    assert_eq!(
        Error::CorruptedData.to_string(),
        "snappy: corrupted compressed data"
    );
    assert_eq!(
        Error::InsufficientBuffer.to_string(),
        "snappy: output buffer too small"
    );
}
