//! Constants for BIP340-style Schnorr signatures over secp256k1

/// Signature size: R.x || s
pub const SCHNORR_SIGNATURE_SIZE: usize = 64;

/// x-only public key size
pub const SCHNORR_PUBLIC_KEY_SIZE: usize = 32;

/// Secret key size
pub const SCHNORR_SECRET_KEY_SIZE: usize = 32;

/// Message digest size accepted by sign/verify
pub const SCHNORR_MESSAGE_HASH_SIZE: usize = 32;

/// Auxiliary randomness size
pub const SCHNORR_AUX_SIZE: usize = 32;

/// Tag for hashing the auxiliary randomness
pub const TAG_AUX: &[u8] = b"aux";

/// Tag for nonce derivation
pub const TAG_NONCE: &[u8] = b"nonce";

/// Tag for the challenge hash
pub const TAG_CHALLENGE: &[u8] = b"challenge";
