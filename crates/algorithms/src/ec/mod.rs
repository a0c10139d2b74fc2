//! Elliptic Curve Primitives
//!
//! Only the Koblitz curve secp256k1 is provided.

pub mod k256;

pub use k256::{Point as K256Point, PointFormat, Scalar as K256Scalar};
