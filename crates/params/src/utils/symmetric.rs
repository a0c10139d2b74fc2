//! Constants for symmetric encryption algorithms

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC initialization vector size in bytes (one AES block)
pub const AES_CBC_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Number of rounds for AES-256
pub const AES256_ROUNDS: usize = 14;

/// Number of 32-bit words in an expanded AES-256 key: Nb * (Nr + 1)
pub const AES256_SCHEDULE_WORDS: usize = 4 * (AES256_ROUNDS + 1);
