//! BIP340-style Schnorr signatures over secp256k1
//!
//! Public keys are x-only (32 bytes, even y implied) and signatures are
//! `R.x || s` (64 bytes). Messages are 32-byte digests computed by the caller.
//!
//! Hashes are domain separated with [`tagged_hash`] using the short tags
//! `"aux"`, `"nonce"` and `"challenge"`.

use alloc::string::ToString;

use kcrypt_algorithms::ec::k256::{self as ec, FieldElement, Point, Scalar};
use kcrypt_algorithms::hash::{HashFunction, Sha256};
use kcrypt_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};
use kcrypt_common::security::SecretBuffer;
use kcrypt_params::traditional::schnorr::{
    SCHNORR_AUX_SIZE, SCHNORR_MESSAGE_HASH_SIZE, SCHNORR_PUBLIC_KEY_SIZE,
    SCHNORR_SECRET_KEY_SIZE, SCHNORR_SIGNATURE_SIZE, TAG_AUX, TAG_CHALLENGE, TAG_NONCE,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// SHA-256(SHA-256(tag) || SHA-256(tag) || parts...)
pub fn tagged_hash(tag: &[u8], parts: &[&[u8]]) -> [u8; 32] {
    let tag_digest = Sha256::digest(tag);
    let mut hasher = Sha256::new();
    hasher.update(&tag_digest).update(&tag_digest);
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize()
}

/// Schnorr signature scheme over secp256k1
pub struct Schnorr;

/// x-only public key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchnorrPublicKey(pub [u8; SCHNORR_PUBLIC_KEY_SIZE]);

/// Secret key, guaranteed to satisfy 0 < k < n
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SchnorrSecretKey(SecretBuffer<SCHNORR_SECRET_KEY_SIZE>);

/// Signature bytes `R.x || s`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchnorrSignature(pub [u8; SCHNORR_SIGNATURE_SIZE]);

impl SchnorrSecretKey {
    /// Validate and wrap a 32-byte private key
    pub fn from_bytes(bytes: &[u8; SCHNORR_SECRET_KEY_SIZE]) -> ApiResult<Self> {
        Scalar::new(*bytes)
            .map_err(|e| ApiError::from(e).with_context("SchnorrSecretKey::from_bytes"))?;
        Ok(SchnorrSecretKey(SecretBuffer::new(*bytes)))
    }
}

impl AsRef<[u8]> for SchnorrSecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl AsRef<[u8]> for SchnorrPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl SchnorrSignature {
    /// Parse a signature from a 64-byte slice
    pub fn from_slice(bytes: &[u8]) -> ApiResult<Self> {
        let sig: [u8; SCHNORR_SIGNATURE_SIZE] =
            bytes.try_into().map_err(|_| ApiError::InvalidLength {
                context: "SchnorrSignature::from_slice",
                expected: SCHNORR_SIGNATURE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(SchnorrSignature(sig))
    }

    /// The x-coordinate of the nonce point
    pub fn r_bytes(&self) -> &[u8] {
        &self.0[..32]
    }

    /// The response scalar
    pub fn s_bytes(&self) -> &[u8] {
        &self.0[32..]
    }
}

impl AsRef<[u8]> for SchnorrSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SchnorrSignature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SchnorrSignature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = <alloc::vec::Vec<u8> as serde::Deserialize>::deserialize(deserializer)?;
        SchnorrSignature::from_slice(&bytes).map_err(serde::de::Error::custom)
    }
}

fn private_scalar(secret_key: &[u8; 32], context: &'static str) -> ApiResult<Scalar> {
    Scalar::new(*secret_key).map_err(|e| ApiError::from(e).with_context(context))
}

fn draw_aux() -> ApiResult<[u8; SCHNORR_AUX_SIZE]> {
    let mut aux = [0u8; SCHNORR_AUX_SIZE];
    OsRng
        .try_fill_bytes(&mut aux)
        .map_err(|e| ApiError::RandomGeneration {
            context: "schnorr aux randomness",
            message: e.to_string(),
        })?;
    Ok(aux)
}

impl Schnorr {
    /// x-only public key of a private key
    pub fn x_only_public_key(secret_key: &[u8; 32]) -> ApiResult<[u8; SCHNORR_PUBLIC_KEY_SIZE]> {
        let k = private_scalar(secret_key, "schnorr::x_only_public_key")?;
        let p = ec::scalar_mult_base_g(&k)?;
        Ok(p.serialize_x_only()?)
    }

    /// Sign a 32-byte digest with fresh auxiliary randomness from the OS
    pub fn sign(
        msg_hash: &[u8; SCHNORR_MESSAGE_HASH_SIZE],
        secret_key: &[u8; SCHNORR_SECRET_KEY_SIZE],
    ) -> ApiResult<SchnorrSignature> {
        let mut aux = draw_aux()?;
        let result = Self::sign_with_aux(msg_hash, secret_key, &aux);
        aux.zeroize();
        result
    }

    /// Sign a 32-byte digest with caller-supplied auxiliary randomness.
    ///
    /// The output is a deterministic function of the three inputs.
    pub fn sign_with_aux(
        msg_hash: &[u8; SCHNORR_MESSAGE_HASH_SIZE],
        secret_key: &[u8; SCHNORR_SECRET_KEY_SIZE],
        aux: &[u8; SCHNORR_AUX_SIZE],
    ) -> ApiResult<SchnorrSignature> {
        const CONTEXT: &str = "schnorr::sign";

        let k = private_scalar(secret_key, CONTEXT)?;
        let p = ec::scalar_mult_base_g(&k)?;
        // The signing key must correspond to the even-y public point
        let d = if p.has_even_y() { k } else { k.negate() };
        let px = p.serialize_x_only()?;

        let aux_hash = tagged_hash(TAG_AUX, &[&aux[..]]);
        let mut t = d.serialize();
        for (b, h) in t.iter_mut().zip(aux_hash.iter()) {
            *b ^= h;
        }

        let nonce_seed = tagged_hash(TAG_NONCE, &[&t[..], &px[..], &msg_hash[..]]);
        t.zeroize();
        let k0 = Scalar::from_bytes_reduced(&nonce_seed);
        if k0.is_zero() {
            debug!("derived Schnorr nonce is zero");
            return Err(ApiError::NonceGenerationFailure { context: CONTEXT });
        }

        let r = ec::scalar_mult_base_g(&k0)?;
        let nonce = if r.has_even_y() { k0 } else { k0.negate() };
        let rx = r.serialize_x_only()?;

        let e = Scalar::from_bytes_reduced(&tagged_hash(
            TAG_CHALLENGE,
            &[&rx[..], &px[..], &msg_hash[..]],
        ));
        let s = nonce.add(&e.mul(&d));

        let mut sig = [0u8; SCHNORR_SIGNATURE_SIZE];
        sig[..32].copy_from_slice(&rx);
        sig[32..].copy_from_slice(&s.serialize());
        Ok(SchnorrSignature(sig))
    }

    /// Verify a signature against a digest and an x-only public key.
    ///
    /// Malformed input of any kind (wrong lengths, `r >= p`, `s >= n`,
    /// a public key that does not lift) yields `false`.
    pub fn verify(signature: &[u8], msg_hash: &[u8], public_key: &[u8]) -> bool {
        match verify_parts(signature, msg_hash, public_key) {
            Ok(()) => true,
            Err(reason) => {
                debug!(reason, "Schnorr signature rejected");
                false
            }
        }
    }
}

fn verify_parts(
    signature: &[u8],
    msg_hash: &[u8],
    public_key: &[u8],
) -> Result<(), &'static str> {
    if signature.len() != SCHNORR_SIGNATURE_SIZE {
        return Err("signature length");
    }
    if msg_hash.len() != SCHNORR_MESSAGE_HASH_SIZE {
        return Err("message hash length");
    }
    let pk: [u8; SCHNORR_PUBLIC_KEY_SIZE] =
        public_key.try_into().map_err(|_| "public key length")?;

    let mut r_bytes = [0u8; 32];
    r_bytes.copy_from_slice(&signature[..32]);
    let mut s_bytes = [0u8; 32];
    s_bytes.copy_from_slice(&signature[32..]);

    let r = FieldElement::from_bytes(&r_bytes).map_err(|_| "r is not below p")?;
    let s = Scalar::from_canonical_bytes(&s_bytes).ok_or("s is not below n")?;
    let p = Point::lift_x_bytes(&pk).ok_or("public key does not lift")?;

    let e = Scalar::from_bytes_reduced(&tagged_hash(
        TAG_CHALLENGE,
        &[&r_bytes[..], &pk[..], msg_hash],
    ));

    let s_g = ec::scalar_mult_base_g(&s).map_err(|_| "s·G")?;
    let e_p = ec::scalar_mult(&e, &p).map_err(|_| "e·P")?;
    let big_r = s_g.add(&e_p.negate()).map_err(|_| "s·G - e·P")?;

    match big_r.coordinates() {
        None => Err("R is the identity"),
        Some((_, y)) if y.is_odd() => Err("R has odd y"),
        Some((x, _)) if *x != r => Err("R.x does not match r"),
        Some(_) => Ok(()),
    }
}

impl SignatureTrait for Schnorr {
    type PublicKey = SchnorrPublicKey;
    type SecretKey = SchnorrSecretKey;
    type SignatureData = SchnorrSignature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "Schnorr-secp256k1"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (sk_scalar, pk_point) = ec::generate_keypair(rng)?;
        let public_key = SchnorrPublicKey(pk_point.serialize_x_only()?);
        let secret_key = SchnorrSecretKey(SecretBuffer::new(sk_scalar.serialize()));
        Ok((public_key, secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// `message` must be the 32-byte digest to sign
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let msg_hash: &[u8; SCHNORR_MESSAGE_HASH_SIZE] =
            message.try_into().map_err(|_| ApiError::InvalidLength {
                context: "schnorr::sign message hash",
                expected: SCHNORR_MESSAGE_HASH_SIZE,
                actual: message.len(),
            })?;
        let mut sk = secret_key.0.to_array();
        let mut aux = draw_aux()?;
        let result = Self::sign_with_aux(msg_hash, &sk, &aux);
        sk.zeroize();
        aux.zeroize();
        result
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        verify_parts(&signature.0, message, &public_key.0).map_err(|reason| {
            debug!(reason, "Schnorr signature rejected");
            ApiError::InvalidSignature {
                context: "schnorr::verify",
            }
        })
    }
}
