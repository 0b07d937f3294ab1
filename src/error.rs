//! Crate-wide error taxonomy.
//!
//! Every fallible operation returns one of the four variants below.  All
//! errors surface synchronously at the call boundary; none are retriable and
//! no partial result is promised, though the output buffer's prefix may have
//! been written by the time an error is detected.

use core::fmt;

/// Errors returned by the Snappy block codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The compressed stream violates the tag grammar or a cursor bounds
    /// check while decoding or validating.
    CorruptedData,
    /// The output buffer is smaller than required: less than
    /// [`max_compressed_length`](crate::max_compressed_length) for
    /// compression, or less than the declared uncompressed length for
    /// decompression.
    InsufficientBuffer,
    /// The length prefix is malformed: the stream ends inside the varint,
    /// the fifth byte has its continuation bit set, or the value exceeds
    /// 2³² − 1.
    InvalidLength,
    /// The compression input exceeds 2³² − 1 bytes and cannot be represented
    /// in the length prefix.
    InputTooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CorruptedData => f.write_str("snappy: corrupted compressed data"),
            Error::InsufficientBuffer => f.write_str("snappy: output buffer too small"),
            Error::InvalidLength => f.write_str("snappy: malformed uncompressed-length prefix"),
            Error::InputTooLarge => f.write_str("snappy: input longer than 2^32 - 1 bytes"),
        }
    }
}

impl std::error::Error for Error {}
