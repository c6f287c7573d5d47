//! Wire encoding error types.

use thiserror::Error;

/// Errors produced while encoding or decoding wire messages.
#[derive(Debug, Error)]
pub enum ProtoError {
    /// Encoding a message to its canonical binary form failed.
    #[error("failed to encode message: {0}")]
    EncodeFailed(String),

    /// Decoding a message from its canonical binary form failed.
    ///
    /// The offending payload is never included; it may contain key material.
    #[error("failed to decode message")]
    DecodeFailed,
}

/// Result type for wire operations.
pub type Result<T> = std::result::Result<T, ProtoError>;
