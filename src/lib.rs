//! `snapr` — a pure-Rust implementation of the Snappy block compression
//! format, interoperable with Google's reference C++ implementation
//! (snappy v1.2.2).
//!
//! # Crate layout
//!
//! | Module   | Contents |
//! |----------|----------|
//! | `block`  | Block-format compression, decompression, and validation. |
//! | `varint` | Little-endian base-128 length-prefix codec. |
//! | `error`  | The closed error taxonomy shared by all operations. |
//! | `corpus` | Deterministic test-data generators (tests and benchmarks). |
//!
//! # Format
//!
//! A Snappy stream is the varint-encoded uncompressed length followed by a
//! sequence of tagged operations: literal runs copied verbatim and
//! back-references replayed from the already-produced output.  The encoder
//! splits its input into independent fragments of at most 64 KiB and finds
//! repetitions with a small per-fragment hash table; the decoder validates
//! every length and offset against its cursors before moving a byte.  See
//! [`block::tag`] for the wire forms.
//!
//! # Example
//!
//! ```
//! let data = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
//! let compressed = snappy::compress_to_vec(data).unwrap();
//! assert!(compressed.len() <= snappy::max_compressed_length(data.len()));
//! let restored = snappy::decompress_to_vec(&compressed).unwrap();
//! assert_eq!(&restored, data);
//! ```

pub mod block;
pub mod corpus;
pub mod error;
pub mod varint;

// ── Version constants (the reference release this codec tracks) ──────────────
pub const SNAPPY_VERSION_MAJOR: u32 = 1;
pub const SNAPPY_VERSION_MINOR: u32 = 2;
pub const SNAPPY_VERSION_PATCH: u32 = 2;
pub const SNAPPY_VERSION_STRING: &str = "1.2.2";

/// Returns the version string of the reference implementation whose wire
/// format and encoder output this crate reproduces.
pub fn version_string() -> &'static str {
    SNAPPY_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::compress::{compress, compress_to_vec, max_compressed_length, CompressionLevel};
pub use block::decompress_api::{decompress, decompress_to_vec};
pub use block::validate::{is_valid, uncompressed_length};
pub use error::Error;
