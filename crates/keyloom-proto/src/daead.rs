//! Deterministic-AEAD key-format messages.

use serde::{Deserialize, Serialize};

/// Recipe for a fresh AES-SIV key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AesSivKeyFormat {
    /// Length of the key material in bytes. AES-SIV uses 64.
    pub key_size: u32,
    /// Format version. Always 0; higher values are rejected.
    pub version: u32,
}
