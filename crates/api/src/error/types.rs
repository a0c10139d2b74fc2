//! Error type definitions for cryptographic operations

/// Primary error type for kcrypt operations
///
/// Every variant carries a static context naming the operation or input that
/// failed. Messages never include secret material.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Private key is zero or not below the group order
    #[error("invalid private key: {context}")]
    InvalidPrivateKey {
        context: &'static str,
    },

    /// Public key bytes have an unknown length/prefix combination
    #[error("invalid public key encoding: {context} ({length} bytes)")]
    InvalidPublicKeyEncoding {
        context: &'static str,
        length: usize,
    },

    /// Decoded coordinates do not satisfy y² = x³ + 7
    #[error("point not on curve: {context}")]
    PointNotOnCurve {
        context: &'static str,
    },

    /// Modular inverse requested for a value sharing a factor with the modulus
    #[error("no modular inverse: {context}")]
    NoModularInverse {
        context: &'static str,
    },

    /// ECDH produced the point at infinity
    #[error("invalid shared secret: {context}")]
    InvalidSharedSecret {
        context: &'static str,
    },

    /// Derived Schnorr nonce reduced to zero
    #[error("nonce generation failure: {context}")]
    NonceGenerationFailure {
        context: &'static str,
    },

    /// Symmetric key of the wrong size
    #[error("{context}: invalid key length (expected {expected}, got {actual})")]
    KeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Initialization vector of the wrong size
    #[error("{context}: invalid IV length (expected {expected}, got {actual})")]
    IvLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Ciphertext not aligned to the block size
    #[error("{context}: length {actual} is not a multiple of {block_size}")]
    CiphertextLength {
        context: &'static str,
        block_size: usize,
        actual: usize,
    },

    /// Fixed-size input (digest, signature, secret) of the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Signature rejected by a verifier
    #[error("invalid signature: {context}")]
    InvalidSignature {
        context: &'static str,
    },

    /// Hex string could not be decoded
    #[error("invalid hex: {message}")]
    InvalidHex {
        message: String,
    },

    /// Random number generator failure
    #[error("random generation error: {context}: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for kcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and data
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidPrivateKey { .. } => Self::InvalidPrivateKey { context },
            Self::InvalidPublicKeyEncoding { length, .. } => {
                Self::InvalidPublicKeyEncoding { context, length }
            }
            Self::PointNotOnCurve { .. } => Self::PointNotOnCurve { context },
            Self::NoModularInverse { .. } => Self::NoModularInverse { context },
            Self::InvalidSharedSecret { .. } => Self::InvalidSharedSecret { context },
            Self::NonceGenerationFailure { .. } => Self::NonceGenerationFailure { context },
            Self::KeyLength { expected, actual, .. } => Self::KeyLength { context, expected, actual },
            Self::IvLength { expected, actual, .. } => Self::IvLength { context, expected, actual },
            Self::CiphertextLength { block_size, actual, .. } => {
                Self::CiphertextLength { context, block_size, actual }
            }
            Self::InvalidLength { expected, actual, .. } => {
                Self::InvalidLength { context, expected, actual }
            }
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
            Self::InvalidHex { message } => Self::InvalidHex { message },
            Self::RandomGeneration { message, .. } => Self::RandomGeneration { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}
