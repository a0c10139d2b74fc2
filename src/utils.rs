//! Hashing, hex and randomness helpers

use kcrypt_algorithms::{HashFunction, K256Scalar, Sha256};
use kcrypt_api::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::input::{decode_hex, Input};

/// SHA-256 digest of the input
pub fn sha256<'a>(data: impl Into<Input<'a>>) -> Result<[u8; 32]> {
    let data = data.into().to_bytes()?;
    Ok(Sha256::digest(&data))
}

/// Lowercase hex encoding
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode an even-length hex string
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    decode_hex(hex)
}

/// Check that the input is 32 bytes encoding a scalar with 0 < k < n
pub fn is_valid_private_key<'a>(bytes: impl Into<Input<'a>>) -> bool {
    match bytes.into().to_private_key("is_valid_private_key") {
        Ok(key) => K256Scalar::is_valid_bytes(&key),
        Err(_) => false,
    }
}

/// Draw a uniformly random private key by rejection sampling
pub fn random_private_key() -> Result<[u8; 32]> {
    let mut key = [0u8; 32];
    loop {
        fill_random(&mut key, "random_private_key")?;
        if K256Scalar::is_valid_bytes(&key) {
            return Ok(key);
        }
        key.zeroize();
    }
}

/// `len` bytes from the operating system RNG
pub fn random_bytes(len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    fill_random(&mut out, "random_bytes")?;
    Ok(out)
}

fn fill_random(buf: &mut [u8], context: &'static str) -> Result<()> {
    OsRng.try_fill_bytes(buf).map_err(|e| Error::RandomGeneration {
        context,
        message: e.to_string(),
    })
}
