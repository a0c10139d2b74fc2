//! Known-answer vectors shared by the kcrypt integration tests

pub mod vectors;

use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Decode a hex literal from a vector table
pub fn h(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex in vector {:?}: {}", s, e))
}

/// Decode a hex literal into a fixed-size array
pub fn h_array<const N: usize>(s: &str) -> [u8; N] {
    let bytes = h(s);
    bytes
        .as_slice()
        .try_into()
        .unwrap_or_else(|_| panic!("vector {:?} is {} bytes, expected {}", s, bytes.len(), N))
}

/// Deterministic RNG for reproducible test keys
pub fn test_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
