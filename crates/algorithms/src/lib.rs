//! Cryptographic primitives for the kcrypt library
//!
//! This crate implements the low-level building blocks behind kcrypt:
//! 256-bit modular arithmetic, the secp256k1 curve, SHA-256, the AES-256
//! block cipher, CBC mode and PKCS#7 padding. Everything is written from
//! scratch on top of fixed-width integers; no external cryptography crate
//! is involved.
//!
//! Secret material (scalars, round keys, hash state) is zeroized on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Multi-precision arithmetic
pub mod math;
pub use math::{Modulus, U256};

// Block cipher implementations
pub mod block;
pub use block::{Aes256, BlockCipher, Cbc, CipherAlgorithm, Pkcs7};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{k256, K256Point, K256Scalar, PointFormat};
