//! Snappy block compression, decompression, and validation.
//!
//! This module contains the whole block-format engine: the varint length
//! prefix is handled by [`crate::varint`], everything after it lives here.

pub mod compress;
pub mod decompress_api;
pub mod decompress_core;
pub mod tag;
pub mod types;
pub mod validate;

// Re-export the most important public API items at the module level.
pub use compress::{compress, compress_to_vec, max_compressed_length, CompressionLevel};
pub use decompress_api::{decompress, decompress_to_vec};
pub use types::{MAX_FRAGMENT_SIZE, MAX_INPUT_SIZE};
pub use validate::{is_valid, uncompressed_length};
