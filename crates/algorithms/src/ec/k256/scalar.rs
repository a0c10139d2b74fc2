//! secp256k1 scalar arithmetic operations modulo the group order n

use core::fmt;

use super::constants::{GROUP_ORDER, K256_SCALAR_SIZE};
use crate::error::{Error, Result};
use crate::math::U256;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// secp256k1 scalar value for use in elliptic curve operations
///
/// Always holds a value in `[0, n)`. Private keys additionally exclude zero,
/// which [`Scalar::new`] enforces.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(U256);

impl Scalar {
    /// Create a private-key scalar from big-endian bytes.
    ///
    /// Returns [`Error::ScalarRange`] unless `0 < k < n`.
    pub fn new(data: [u8; K256_SCALAR_SIZE]) -> Result<Self> {
        let v = U256::from_be_bytes(&data);
        if v.is_zero() || v >= *GROUP_ORDER.value() {
            return Err(Error::ScalarRange {
                context: "secp256k1 private key",
            });
        }
        Ok(Scalar(v))
    }

    /// Parse a canonical scalar, accepting zero but rejecting values `>= n`
    pub fn from_canonical_bytes(data: &[u8; K256_SCALAR_SIZE]) -> Option<Self> {
        let v = U256::from_be_bytes(data);
        if v >= *GROUP_ORDER.value() {
            None
        } else {
            Some(Scalar(v))
        }
    }

    /// Interpret bytes as a big-endian integer and reduce it modulo n.
    ///
    /// The result may be zero.
    pub fn from_bytes_reduced(data: &[u8; K256_SCALAR_SIZE]) -> Self {
        Scalar(GROUP_ORDER.reduce(&U256::from_be_bytes(data)))
    }

    /// Check whether `data` encodes a valid private key (`0 < k < n`)
    pub fn is_valid_bytes(data: &[u8; K256_SCALAR_SIZE]) -> bool {
        let v = U256::from_be_bytes(data);
        !v.is_zero() && v < *GROUP_ORDER.value()
    }

    /// Draw a uniformly random private-key scalar by rejection sampling
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; K256_SCALAR_SIZE];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Ok(scalar) = Scalar::new(bytes) {
                bytes.zeroize();
                return scalar;
            }
        }
    }

    /// The zero scalar
    pub fn zero() -> Self {
        Scalar(U256::ZERO)
    }

    /// Serialize this scalar to big-endian bytes.
    pub fn serialize(&self) -> [u8; K256_SCALAR_SIZE] {
        self.0.to_be_bytes()
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Addition modulo n
    pub fn add(&self, other: &Self) -> Self {
        Scalar(GROUP_ORDER.add(&self.0, &other.0))
    }

    /// Multiplication modulo n
    pub fn mul(&self, other: &Self) -> Self {
        Scalar(GROUP_ORDER.mul(&self.0, &other.0))
    }

    /// Negation modulo n
    pub fn negate(&self) -> Self {
        Scalar(GROUP_ORDER.neg(&self.0))
    }

    /// Multiplicative inverse modulo n
    pub fn invert(&self) -> Result<Self> {
        GROUP_ORDER.inverse(&self.0).map(Scalar)
    }

    pub(crate) fn as_u256(&self) -> &U256 {
        &self.0
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
