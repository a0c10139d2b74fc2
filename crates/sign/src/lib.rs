//! Digital Signature Schemes
//!
//! BIP340-style Schnorr signatures over secp256k1 with x-only public keys.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod traditional;

pub use traditional::schnorr::{
    tagged_hash, Schnorr, SchnorrPublicKey, SchnorrSecretKey, SchnorrSignature,
};
