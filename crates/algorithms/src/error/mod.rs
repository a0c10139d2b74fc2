//! Error handling for cryptographic primitives

use alloc::string::ToString;
use core::fmt;

use kcrypt_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error for fixed-size inputs
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Scalar outside the range 0 < k < n
    ScalarRange {
        /// Operation that rejected the scalar
        context: &'static str,
    },

    /// Bytes that are not one of the accepted point encodings
    Encoding {
        /// Operation that rejected the encoding
        context: &'static str,
        /// Length of the rejected input
        length: usize,
    },

    /// Coordinates that do not lie on the curve
    NotOnCurve {
        /// Operation that rejected the point
        context: &'static str,
    },

    /// The point at infinity where an affine point is required
    Identity {
        /// Operation that hit the identity
        context: &'static str,
    },

    /// Modular inverse of a value that is not coprime to the modulus
    NoInverse {
        /// Operation that requested the inverse
        context: &'static str,
    },

    /// Block cipher key of the wrong size
    KeyLength {
        /// Cipher that rejected the key
        context: &'static str,
        /// Expected key size in bytes
        expected: usize,
        /// Actual key size in bytes
        actual: usize,
    },

    /// Initialization vector of the wrong size
    IvLength {
        /// Mode that rejected the IV
        context: &'static str,
        /// Expected IV size in bytes
        expected: usize,
        /// Actual IV size in bytes
        actual: usize,
    },

    /// Ciphertext that is not a whole number of blocks
    CiphertextLength {
        /// Mode that rejected the ciphertext
        context: &'static str,
        /// Block size in bytes
        block_size: usize,
        /// Actual ciphertext size in bytes
        actual: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}", context, expected, actual)
            }
            Error::ScalarRange { context } => {
                write!(f, "Scalar out of range in {}", context)
            }
            Error::Encoding { context, length } => {
                write!(f, "Invalid point encoding in {} ({} bytes)", context, length)
            }
            Error::NotOnCurve { context } => write!(f, "Point not on curve in {}", context),
            Error::Identity { context } => write!(f, "Point at infinity in {}", context),
            Error::NoInverse { context } => write!(f, "No modular inverse in {}", context),
            Error::KeyLength { context, expected, actual } => {
                write!(f, "Invalid key length for {}: expected {}, got {}", context, expected, actual)
            }
            Error::IvLength { context, expected, actual } => {
                write!(f, "Invalid IV length for {}: expected {}, got {}", context, expected, actual)
            }
            Error::CiphertextLength { context, block_size, actual } => {
                write!(
                    f,
                    "Invalid ciphertext length for {}: {} is not a multiple of {}",
                    context, actual, block_size
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::Other {
                context: name,
                message: reason.to_string(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::ScalarRange { context } => CoreError::InvalidPrivateKey { context },
            Error::Encoding { context, length } => {
                CoreError::InvalidPublicKeyEncoding { context, length }
            }
            // The identity has no affine coordinates, so it is reported as off-curve
            Error::NotOnCurve { context } | Error::Identity { context } => {
                CoreError::PointNotOnCurve { context }
            }
            Error::NoInverse { context } => CoreError::NoModularInverse { context },
            Error::KeyLength { context, expected, actual } => CoreError::KeyLength {
                context,
                expected,
                actual,
            },
            Error::IvLength { context, expected, actual } => CoreError::IvLength {
                context,
                expected,
                actual,
            },
            Error::CiphertextLength { context, block_size, actual } => {
                CoreError::CiphertextLength {
                    context,
                    block_size,
                    actual,
                }
            }
        }
    }
}

pub mod validate;
