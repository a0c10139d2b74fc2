//! Traditional signature schemes

pub mod schnorr;

pub use schnorr::{Schnorr, SchnorrPublicKey, SchnorrSecretKey, SchnorrSignature};
