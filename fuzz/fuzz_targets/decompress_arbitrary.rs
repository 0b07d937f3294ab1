#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the decoder and the validator.
    // Err results are expected and fine; what we verify is no panics and no
    // out-of-bounds access.

    let _ = snappy::is_valid(data);
    let _ = snappy::uncompressed_length(data);

    // Zero-length output buffer.
    {
        let mut dst = vec![0u8; 0];
        let _ = snappy::decompress(data, &mut dst);
    }

    // 4 KiB output buffer — covers most real block sizes.
    {
        let mut dst = vec![0u8; 4096];
        let _ = snappy::decompress(data, &mut dst);
    }

    // Output buffer sized from the declared length, capped at 1 MiB so the
    // fuzzer doesn't OOM on tiny inputs that claim huge output.
    if let Some(declared) = snappy::uncompressed_length(data) {
        let capped = (declared as usize).min(1 << 20);
        let mut dst = vec![0u8; capped];
        if let Ok(written) = snappy::decompress(data, &mut dst) {
            assert!(written <= dst.len());
        }
    }
});
