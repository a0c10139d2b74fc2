//! Multi-precision integer arithmetic for curve operations
//!
//! [`U256`] holds 256-bit unsigned integers as eight little-endian 32-bit
//! limbs. [`Modulus`] performs arithmetic modulo a 256-bit odd modulus whose
//! top bit is set, which covers both the secp256k1 field prime and the group
//! order.

mod modulus;
mod u256;

pub use modulus::Modulus;
pub use u256::{U256, LIMBS};
