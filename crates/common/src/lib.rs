//! Common implementations and shared functionality for the kcrypt library
//!
//! This crate provides the secret containers used by the key-handling crates.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

pub use security::SecretBuffer;
