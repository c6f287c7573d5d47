//! Core error types.

use keyloom_crypto::CryptoError;
use thiserror::Error;

/// Errors raised by the registry, key managers and keyset machinery.
///
/// Messages never contain key bytes.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A serialized key was malformed, had a bad version or failed
    /// parameter validation.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// A serialized key format was malformed or failed parameter
    /// validation.
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// No key manager is registered for the type URL.
    #[error("no key manager registered for {0}")]
    NotFound(String),

    /// A different key manager is already registered for the type URL.
    #[error("a key manager for {0} is already registered")]
    AlreadyRegistered(String),

    /// A keyset violated a structural invariant.
    #[error("malformed keyset: {0}")]
    MalformedKeyset(String),

    /// The keyset has no key with the requested id.
    #[error("no key with id {0} in keyset")]
    KeyNotFound(u32),

    /// The pseudorandom source yielded fewer bytes than required.
    #[error("not enough pseudorandomness given")]
    ShortEntropy,

    /// A key manager produced a primitive of a different capability than
    /// the wrapper asked for.
    #[error("expected a {expected} primitive, got {actual}")]
    WrongPrimitive {
        /// Capability the caller asked for.
        expected: &'static str,
        /// Capability the key manager produced.
        actual: &'static str,
    },

    /// An underlying primitive operation failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Any other unexpected condition.
    #[error("internal: {0}")]
    Internal(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
