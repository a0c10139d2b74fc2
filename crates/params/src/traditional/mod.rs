//! Constants for elliptic-curve algorithms

pub mod schnorr;
pub mod secp256k1;
