//! Elliptic Curve Diffie-Hellman key agreement
//!
//! Key derivation and raw x-coordinate ECDH over secp256k1.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod k256;

pub use k256::{
    compute_shared_secret, derive_public_key, EcdhK256, EcdhK256PublicKey, EcdhK256SecretKey,
    EcdhK256SharedSecret,
};
