//! Enumerations shared across algorithm families.

use serde::{Deserialize, Serialize};

/// Hash function used by HMAC, HKDF and signature schemes.
///
/// The stable upper-case name is what crosses the boundary into the
/// underlying primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashKind {
    /// SHA-1 (20-byte digest). Retained for legacy keys only.
    Sha1,
    /// SHA-224 (28-byte digest).
    Sha224,
    /// SHA-256 (32-byte digest).
    Sha256,
    /// SHA-384 (48-byte digest).
    Sha384,
    /// SHA-512 (64-byte digest).
    Sha512,
}

impl HashKind {
    /// Stable name of the hash, as passed to the underlying primitives.
    pub fn name(&self) -> &'static str {
        match self {
            HashKind::Sha1 => "SHA1",
            HashKind::Sha224 => "SHA224",
            HashKind::Sha256 => "SHA256",
            HashKind::Sha384 => "SHA384",
            HashKind::Sha512 => "SHA512",
        }
    }
}

/// Elliptic curve used by ECDSA and ECIES keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EllipticCurveKind {
    /// NIST P-256.
    NistP256,
    /// NIST P-384.
    NistP384,
    /// NIST P-521.
    NistP521,
}

/// Encoding of an elliptic-curve point on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcPointFormat {
    /// Uncompressed `0x04 || x || y` encoding.
    Uncompressed,
    /// Compressed single-coordinate encoding.
    Compressed,
}
