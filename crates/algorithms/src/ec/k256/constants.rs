//! Shared constants for secp256k1 operations

use crate::math::{Modulus, U256};
use kcrypt_params::traditional::secp256k1::{
    SECP256K1_B, SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_GX, SECP256K1_GY, SECP256K1_N,
    SECP256K1_P, SECP256K1_POINT_COMPRESSED_SIZE, SECP256K1_POINT_UNCOMPRESSED_SIZE,
    SECP256K1_POINT_XONLY_SIZE, SECP256K1_SCALAR_SIZE,
};

/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const K256_SCALAR_SIZE: usize = SECP256K1_SCALAR_SIZE;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const K256_FIELD_ELEMENT_SIZE: usize = SECP256K1_FIELD_ELEMENT_SIZE;

/// Size of an uncompressed secp256k1 point in bytes: 0x04 || x || y
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = SECP256K1_POINT_UNCOMPRESSED_SIZE;

/// Size of a compressed secp256k1 point in bytes: 0x02/0x03 || x
pub const K256_POINT_COMPRESSED_SIZE: usize = SECP256K1_POINT_COMPRESSED_SIZE;

/// Size of an x-only secp256k1 point in bytes
pub const K256_POINT_XONLY_SIZE: usize = SECP256K1_POINT_XONLY_SIZE;

/// Field prime p = 2^256 - 2^32 - 977
pub(crate) const FIELD_MODULUS: Modulus = Modulus::new(U256::from_be_bytes(&SECP256K1_P));

/// Group order n
pub(crate) const GROUP_ORDER: Modulus = Modulus::new(U256::from_be_bytes(&SECP256K1_N));

/// Curve coefficient b in y² = x³ + b
pub(crate) const CURVE_B: U256 = U256::from_u32(SECP256K1_B);

/// Base point x-coordinate
pub(crate) const GENERATOR_X: U256 = U256::from_be_bytes(&SECP256K1_GX);

/// Base point y-coordinate
pub(crate) const GENERATOR_Y: U256 = U256::from_be_bytes(&SECP256K1_GY);
