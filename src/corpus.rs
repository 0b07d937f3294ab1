//! Deterministic test-data generators.
//!
//! The patterns mirror the corpus the upstream project generates to exercise
//! its codec: single-character runs, short repeating phrases, record-like
//! lines with interleaved runs, and incompressible noise.  Everything is
//! seeded and reproducible, so tests and benchmarks see identical bytes on
//! every run.

const SENTENCE: &[u8] = b"The quick brown fox jumps over the lazy dog. ";

/// A buffer of exactly `len` bytes, all equal to `byte`.
pub fn run(byte: u8, len: usize) -> Vec<u8> {
    vec![byte; len]
}

/// `pattern` cycled to exactly `len` bytes.
pub fn repeated(pattern: &[u8], len: usize) -> Vec<u8> {
    assert!(!pattern.is_empty());
    pattern.iter().copied().cycle().take(len).collect()
}

/// Repetitive English text: the pangram cycled to exactly `len` bytes.
/// Compresses well, so throughput numbers reflect the codec, not the data.
pub fn text(len: usize) -> Vec<u8> {
    repeated(SENTENCE, len)
}

/// Record-like lines (`"Line <i>: <sentence>"`) with a run of a rotating
/// letter spliced in every tenth line, truncated to exactly `len` bytes.
/// Mixes short unique spans with long repetitions.
pub fn records(len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len + 128);
    let mut i = 0usize;
    while out.len() < len {
        out.extend_from_slice(format!("Line {i}: ").as_bytes());
        out.extend_from_slice(SENTENCE);
        if i % 10 == 0 {
            out.extend_from_slice(&run(b'A' + (i % 26) as u8, 50));
        }
        i += 1;
    }
    out.truncate(len);
    out
}

/// `len` bytes of seeded pseudo-random noise.  No 4-byte window repeats in
/// practice, so the encoder finds nothing to copy and the output is the
/// input plus literal headers.
pub fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut rng = Prng(seed);
    (0..len).map(|_| rng.next_byte()).collect()
}

/// Minimal 32-bit multiply-xor-rotate generator; quality only needs to be
/// good enough to defeat a 4-byte match search.
struct Prng(u32);

impl Prng {
    const PRIME1: u32 = 2_654_435_761;
    const PRIME2: u32 = 2_246_822_519;

    fn next_byte(&mut self) -> u8 {
        self.0 = (self.0.wrapping_mul(Self::PRIME1) ^ Self::PRIME2).rotate_left(13);
        (self.0 >> 24) as u8
    }
}
