//! Canonical binary codec for wire messages.
//!
//! All serialized keys, key formats and template payloads in keyloom use a
//! single deterministic binary encoding so that a message re-encoded from a
//! decoded value is byte-identical to the original.

use crate::errors::{ProtoError, Result};
use serde::{de::DeserializeOwned, Serialize};

/// Encode a wire message to its canonical binary form.
pub fn encode<T: Serialize>(message: &T) -> Result<Vec<u8>> {
    bincode::serialize(message).map_err(|e| ProtoError::EncodeFailed(e.to_string()))
}

/// Decode a wire message from its canonical binary form.
///
/// Decode failures carry no detail about the payload.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|_| ProtoError::DecodeFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hmac::{HmacKeyFormat, HmacParams};
    use crate::common::HashKind;

    #[test]
    fn encode_is_deterministic() {
        let format = HmacKeyFormat {
            params: HmacParams {
                hash: HashKind::Sha256,
                tag_size: 16,
            },
            key_size: 32,
            version: 0,
        };

        let a = encode(&format).unwrap();
        let b = encode(&format).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn round_trip_preserves_value() {
        let format = HmacKeyFormat {
            params: HmacParams {
                hash: HashKind::Sha512,
                tag_size: 32,
            },
            key_size: 64,
            version: 0,
        };

        let bytes = encode(&format).unwrap();
        let decoded: HmacKeyFormat = decode(&bytes).unwrap();
        assert_eq!(decoded, format);
        assert_eq!(encode(&decoded).unwrap(), bytes);
    }

    #[test]
    fn decode_rejects_garbage() {
        let result: Result<HmacKeyFormat> = decode(&[0xff; 3]);
        assert!(result.is_err());
    }
}
