//! # kcrypt
//!
//! A small, self-contained toolkit over secp256k1 and AES-256:
//!
//! - public key derivation in compressed, uncompressed and x-only form
//! - x-only ECDH shared secrets
//! - BIP340-style Schnorr signatures over 32-byte message digests
//! - AES-256-CBC with PKCS#7 padding
//!
//! Every byte parameter of the facade functions accepts raw bytes or a hex
//! string through [`Input`]:
//!
//! ```
//! let sk = "0000000000000000000000000000000000000000000000000000000000000001";
//! let pk = kcrypt::get_public_key(sk, true).unwrap();
//! assert_eq!(
//!     kcrypt::bytes_to_hex(&pk),
//!     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
//! );
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate over the workspace members:
//!
//! - [`kcrypt-algorithms`]: U256 arithmetic, secp256k1 group, SHA-256, AES-256, CBC
//! - [`kcrypt-sign`]: Schnorr signatures
//! - [`kcrypt-ecdh`]: ECDH key agreement
//! - [`kcrypt-api`]: error type and engine traits

#![forbid(unsafe_code)]

pub use kcrypt_algorithms as algorithms;
pub use kcrypt_api as api;
pub use kcrypt_common as common;
pub use kcrypt_ecdh as ecdh;
pub use kcrypt_params as params;
pub use kcrypt_sign as sign;

pub mod aes;
mod input;
mod keys;
pub mod schnorr;
mod utils;

pub use input::Input;
pub use keys::{get_public_key, get_public_key_with_format, get_shared_secret, get_x_only_public_key};
pub use kcrypt_algorithms::PointFormat;
pub use kcrypt_api::{Error, Result};
pub use utils::{
    bytes_to_hex, hex_to_bytes, is_valid_private_key, random_bytes, random_private_key, sha256,
};

/// Common imports for kcrypt users
pub mod prelude {
    pub use crate::api::{Error, KeyAgreement, Result, Signature};
    pub use crate::common::SecretBuffer;
    pub use crate::ecdh::EcdhK256;
    pub use crate::sign::Schnorr;
    pub use crate::{Input, PointFormat};
}
