//! HMAC key and key-format messages.

use crate::common::HashKind;
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Parameters shared by HMAC keys and key formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacParams {
    /// Hash function underlying the MAC.
    pub hash: HashKind,
    /// Length of the emitted tag in bytes.
    pub tag_size: u32,
}

/// Recipe for a fresh HMAC key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKeyFormat {
    /// MAC parameters for the minted key.
    pub params: HmacParams,
    /// Length of the key material to draw, in bytes.
    pub key_size: u32,
    /// Format version. Always 0; higher values are rejected.
    pub version: u32,
}

/// An HMAC key.
///
/// No `Debug`: the raw key bytes must never reach a log line.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct HmacKey {
    /// Key version. Always 0; higher values are rejected.
    #[zeroize(skip)]
    pub version: u32,
    /// MAC parameters.
    #[zeroize(skip)]
    pub params: HmacParams,
    /// Raw key material.
    pub key_value: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn key_round_trips_unchanged() {
        let key = HmacKey {
            version: 0,
            params: HmacParams {
                hash: HashKind::Sha256,
                tag_size: 16,
            },
            key_value: vec![0xaa; 32],
        };

        let bytes = codec::encode(&key).unwrap();
        let decoded: HmacKey = codec::decode(&bytes).unwrap();
        assert_eq!(decoded, key);
        // Re-serialization is byte-identical.
        assert_eq!(codec::encode(&decoded).unwrap(), bytes);
    }
}
