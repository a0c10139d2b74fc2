//! Cryptographic hash functions

pub mod sha2;

pub use sha2::Sha256;

/// Common interface for hash functions
pub trait HashFunction: Clone {
    /// Digest type
    type Output: AsRef<[u8]> + Copy;

    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Internal block size in bytes
    const BLOCK_SIZE: usize;

    /// Create a fresh hashing state
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Produce the digest and reset the state
    fn finalize(&mut self) -> Self::Output;

    /// Hash a complete message in one call
    fn digest(data: &[u8]) -> Self::Output {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Algorithm name
    fn name() -> &'static str;
}
