//! Key agreement (Diffie-Hellman style) traits for kcrypt

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for raw key agreement schemes
///
/// Unlike a KEM there is no ciphertext: each party combines its own secret
/// key with the peer's public key and both arrive at the same shared secret.
pub trait KeyAgreement {
    /// Public key type exchanged with the peer
    type PublicKey: Clone;

    /// Secret key type
    type SecretKey: Zeroize + Clone;

    /// Shared secret produced by the agreement
    type SharedSecret: Zeroize;

    /// Key pair type
    type KeyPair;

    /// Returns the name of this key agreement scheme
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Combine our secret key with the peer's public key
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
