//! XChaCha20-Poly1305 key and key-format messages.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Recipe for a fresh XChaCha20-Poly1305 key. The key size is fixed at
/// 32 bytes, so the format carries only a version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XChaCha20Poly1305KeyFormat {
    /// Format version. Always 0; higher values are rejected.
    pub version: u32,
}

/// An XChaCha20-Poly1305 key. No `Debug` by design.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct XChaCha20Poly1305Key {
    /// Key version. Always 0; higher values are rejected.
    #[zeroize(skip)]
    pub version: u32,
    /// Raw 32-byte key material.
    pub key_value: Vec<u8>,
}
