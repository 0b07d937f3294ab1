#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Compress with the Vec-returning convenience helper (handles the bound
    // calculation), then decompress and compare.
    let compressed = snappy::compress_to_vec(data).expect("bound-sized compression cannot fail");

    assert!(
        compressed.len() <= snappy::max_compressed_length(data.len()),
        "size bound violated: {} > bound for {}",
        compressed.len(),
        data.len()
    );
    assert_eq!(
        snappy::uncompressed_length(&compressed),
        Some(data.len() as u64)
    );
    assert!(snappy::is_valid(&compressed));

    let recovered = snappy::decompress_to_vec(&compressed).expect("own output must decompress");
    assert_eq!(
        recovered,
        data,
        "block round-trip mismatch: {} compressed bytes back to {} bytes (expected {})",
        compressed.len(),
        recovered.len(),
        data.len()
    );
});
