//! Block cipher implementations
//!
//! AES-256 (FIPS 197), the CBC mode of operation and PKCS#7 padding.

pub mod aes;
pub mod modes;
pub mod padding;

pub use aes::Aes256;
pub use modes::cbc::Cbc;
pub use padding::Pkcs7;

use crate::error::Result;
use rand::{CryptoRng, RngCore};

/// Static description of a cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// A block cipher keyed once and applied to single blocks in place
pub trait BlockCipher: CipherAlgorithm {
    /// Key type
    type Key;

    /// Key the cipher
    fn new(key: &Self::Key) -> Self;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generate a random key
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;

    /// Block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }
}
