//! Primitive-level error types.

use thiserror::Error;

/// Errors raised by the subtle primitives.
///
/// Messages carry sizes and algorithm names only, never key bytes.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The named hash function is not supported.
    #[error("unsupported hash: {0}")]
    UnsupportedHash(String),

    /// Key material is shorter than the algorithm's minimum.
    #[error("key too short: {actual} bytes, need at least {min}")]
    KeyTooShort {
        /// Minimum key size in bytes.
        min: usize,
        /// Provided key size in bytes.
        actual: usize,
    },

    /// Key material is not exactly the size the algorithm requires.
    #[error("invalid key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        /// Required key size in bytes.
        expected: usize,
        /// Provided key size in bytes.
        actual: usize,
    },

    /// Requested tag size is below the secure minimum.
    #[error("tag size {actual} is too small, need at least {min}")]
    TagSizeTooSmall {
        /// Minimum tag size in bytes.
        min: usize,
        /// Requested tag size in bytes.
        actual: usize,
    },

    /// Requested tag size exceeds the hash's digest size.
    #[error("tag size {actual} exceeds maximum {max} for this hash")]
    TagSizeTooBig {
        /// Maximum tag size in bytes for the chosen hash.
        max: usize,
        /// Requested tag size in bytes.
        actual: usize,
    },

    /// MAC verification failed.
    #[error("invalid mac")]
    InvalidMac,

    /// Ciphertext failed to authenticate or is structurally malformed.
    #[error("invalid ciphertext")]
    InvalidCiphertext,

    /// Signature verification failed.
    #[error("invalid signature")]
    InvalidSignature,

    /// Input data exceeds what the operation can bind.
    #[error("data too long")]
    DataTooLong,

    /// Encryption failed for a reason other than input authenticity.
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    /// The system random source failed.
    #[error("random number generation failed: {0}")]
    RandomGenerationFailed(String),
}

/// Result type for primitive operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
