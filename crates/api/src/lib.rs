//! Public API traits and types for the kcrypt library
//!
//! This crate provides the public API surface shared by the kcrypt crates:
//! the error type every operation reports, and the traits implemented by the
//! signature and key-agreement engines.

pub mod error;
pub mod traits;

pub use error::{Error, Result};

pub use traits::{KeyAgreement, Signature};

pub use traits::{key_agreement, signature};
