//! Constants for hash functions and symmetric ciphers

pub mod hash;
pub mod symmetric;
