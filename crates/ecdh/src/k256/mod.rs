//! ECDH with secp256k1 (K-256)
//!
//! The shared secret is the 32-byte big-endian x-coordinate of `k·P`, with
//! no key derivation applied. Peer public keys may be given in compressed,
//! uncompressed or x-only form.

use alloc::vec::Vec;

use kcrypt_algorithms::ec::k256::{self as ec, Point, PointFormat, Scalar};
use kcrypt_api::{Error as ApiError, KeyAgreement, Result as ApiResult};
use kcrypt_common::security::SecretBuffer;
use kcrypt_params::traditional::secp256k1::{SECP256K1_SCALAR_SIZE, SECP256K1_SHARED_SECRET_SIZE};
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ECDH key agreement over secp256k1
pub struct EcdhK256;

/// Public key for ECDH-K256 (a validated curve point)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdhK256PublicKey(Point);

/// Secret key for ECDH-K256, guaranteed to satisfy 0 < k < n
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct EcdhK256SecretKey(SecretBuffer<SECP256K1_SCALAR_SIZE>);

/// Shared secret from ECDH-K256
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhK256SharedSecret(SecretBuffer<SECP256K1_SHARED_SECRET_SIZE>);

impl EcdhK256PublicKey {
    /// Decode a compressed, uncompressed or x-only public key
    pub fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(EcdhK256PublicKey(Point::decode(bytes)?))
    }

    /// Encode in the requested format
    pub fn to_bytes(&self, format: PointFormat) -> ApiResult<Vec<u8>> {
        Ok(self.0.to_encoded(format)?)
    }

    /// The underlying curve point
    pub fn point(&self) -> &Point {
        &self.0
    }
}

impl EcdhK256SecretKey {
    /// Validate and wrap a 32-byte private key
    pub fn from_bytes(bytes: &[u8; SECP256K1_SCALAR_SIZE]) -> ApiResult<Self> {
        private_scalar(bytes, "EcdhK256SecretKey::from_bytes")?;
        Ok(EcdhK256SecretKey(SecretBuffer::new(*bytes)))
    }
}

impl EcdhK256SharedSecret {
    /// Copy the shared secret out as a plain array
    pub fn to_array(&self) -> [u8; SECP256K1_SHARED_SECRET_SIZE] {
        self.0.to_array()
    }
}

impl AsRef<[u8]> for EcdhK256SecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl AsRef<[u8]> for EcdhK256SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

fn private_scalar(bytes: &[u8; SECP256K1_SCALAR_SIZE], context: &'static str) -> ApiResult<Scalar> {
    Scalar::new(*bytes).map_err(|e| ApiError::from(e).with_context(context))
}

/// Compute `k·G` and encode it in the requested format
pub fn derive_public_key(
    secret_key: &[u8; SECP256K1_SCALAR_SIZE],
    format: PointFormat,
) -> ApiResult<Vec<u8>> {
    let k = private_scalar(secret_key, "ecdh::derive_public_key")?;
    let point = ec::scalar_mult_base_g(&k)?;
    Ok(point.to_encoded(format)?)
}

/// x-coordinate of `k·P` for a decoded peer public key
pub fn compute_shared_secret(
    secret_key: &[u8; SECP256K1_SCALAR_SIZE],
    public_key: &[u8],
) -> ApiResult<[u8; SECP256K1_SHARED_SECRET_SIZE]> {
    let k = private_scalar(secret_key, "ecdh::compute_shared_secret")?;
    let point = Point::decode(public_key)?;
    shared_point_x(&k, &point)
}

fn shared_point_x(k: &Scalar, point: &Point) -> ApiResult<[u8; SECP256K1_SHARED_SECRET_SIZE]> {
    if !point.is_on_curve() {
        return Err(ApiError::PointNotOnCurve {
            context: "ecdh peer public key",
        });
    }
    let shared = ec::scalar_mult(k, point)?;
    match shared.coordinates() {
        Some((x, _)) => Ok(x.to_bytes()),
        None => {
            debug!("ECDH produced the point at infinity");
            Err(ApiError::InvalidSharedSecret {
                context: "ecdh::compute_shared_secret",
            })
        }
    }
}

impl KeyAgreement for EcdhK256 {
    type PublicKey = EcdhK256PublicKey;
    type SecretKey = EcdhK256SecretKey;
    type SharedSecret = EcdhK256SharedSecret;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDH-K256"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (sk_scalar, pk_point) = ec::generate_keypair(rng)?;
        let public_key = EcdhK256PublicKey(pk_point);
        let secret_key = EcdhK256SecretKey(SecretBuffer::new(sk_scalar.serialize()));
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        let mut sk_bytes = secret_key.0.to_array();
        let k = private_scalar(&sk_bytes, "EcdhK256::shared_secret");
        sk_bytes.zeroize();
        let x = shared_point_x(&k?, &peer_public_key.0)?;
        Ok(EcdhK256SharedSecret(SecretBuffer::new(x)))
    }
}

#[cfg(test)]
mod tests;
