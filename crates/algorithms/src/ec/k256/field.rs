//! secp256k1 field arithmetic modulo p

use super::constants::FIELD_MODULUS;
use crate::error::{Error, Result};
use crate::math::U256;

/// Element of the secp256k1 base field, always fully reduced
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement(pub(crate) U256);

impl FieldElement {
    /// The additive identity
    pub fn zero() -> Self {
        FieldElement(U256::ZERO)
    }

    /// The multiplicative identity
    pub fn one() -> Self {
        FieldElement(U256::ONE)
    }

    /// Create a field element from a small integer
    pub fn from_u32(n: u32) -> Self {
        FieldElement(U256::from_u32(n))
    }

    /// Wrap an integer that is already below p
    pub(crate) fn from_u256_unchecked(v: U256) -> Self {
        FieldElement(v)
    }

    /// Parse a big-endian field element, rejecting values `>= p`
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let v = U256::from_be_bytes(bytes);
        if v >= *FIELD_MODULUS.value() {
            return Err(Error::param("FieldElement", "value must be less than p"));
        }
        Ok(FieldElement(v))
    }

    /// Big-endian encoding
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Check whether this element is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check whether the canonical representative is odd
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// Field addition
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(FIELD_MODULUS.add(&self.0, &other.0))
    }

    /// Field subtraction
    pub fn sub(&self, other: &Self) -> Self {
        FieldElement(FIELD_MODULUS.sub(&self.0, &other.0))
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(FIELD_MODULUS.mul(&self.0, &other.0))
    }

    /// Field squaring
    pub fn square(&self) -> Self {
        FieldElement(FIELD_MODULUS.square(&self.0))
    }

    /// `2 * self`
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Additive inverse
    pub fn negate(&self) -> Self {
        FieldElement(FIELD_MODULUS.neg(&self.0))
    }

    /// Exponentiation by an arbitrary 256-bit exponent
    pub fn pow(&self, exp: &U256) -> Self {
        FieldElement(FIELD_MODULUS.pow(&self.0, exp))
    }

    /// Multiplicative inverse, failing for zero
    pub fn invert(&self) -> Result<Self> {
        FIELD_MODULUS.inverse(&self.0).map(FieldElement)
    }

    /// Square root, if one exists
    ///
    /// Since p ≡ 3 (mod 4) the candidate is `self^((p+1)/4)`; it is returned
    /// only if it squares back to `self`.
    pub fn sqrt(&self) -> Option<Self> {
        let (p_plus_one, _) = FIELD_MODULUS.value().adc(&U256::ONE);
        let exp = p_plus_one.shr1().shr1();
        let candidate = self.pow(&exp);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }
}
