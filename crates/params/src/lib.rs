//! Constant values for kcrypt cryptographic operations
//!
//! This crate collects the fixed parameters shared by the kcrypt crates:
//! secp256k1 domain parameters, Schnorr sizes and tags, AES sizes and hash sizes.

#![no_std]

pub mod traditional;
pub mod utils;
