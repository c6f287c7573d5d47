//! Key manager for XChaCha20-Poly1305 keys.

use keyloom_core::key_manager::{KeyManager, Primitive};
use keyloom_core::{keyset, CoreError, Result};
use keyloom_crypto::xchacha20poly1305::KEY_SIZE;
use keyloom_crypto::{random, XChaCha20Poly1305};
use keyloom_proto::{codec, KeyMaterialType, XChaCha20Poly1305Key, XChaCha20Poly1305KeyFormat};
use std::io;
use std::sync::Arc;

/// Version of XChaCha20-Poly1305 keys this manager produces and accepts.
pub const XCHACHA20_POLY1305_KEY_VERSION: u32 = 0;

/// Type URL of XChaCha20-Poly1305 keys.
pub const XCHACHA20_POLY1305_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key";

/// Generates new XChaCha20-Poly1305 keys and produces AEAD primitives from
/// serialized keys.
pub struct XChaCha20Poly1305KeyManager;

impl XChaCha20Poly1305KeyManager {
    // The key size is fixed, so an empty format is as good as the default.
    fn parse_key_format(serialized_key_format: &[u8]) -> Result<XChaCha20Poly1305KeyFormat> {
        if serialized_key_format.is_empty() {
            return Ok(XChaCha20Poly1305KeyFormat { version: 0 });
        }
        codec::decode(serialized_key_format)
            .map_err(|_| CoreError::InvalidKeyFormat("unparseable key format".to_string()))
    }

    fn fresh_key(key_value: Vec<u8>) -> Result<Vec<u8>> {
        let key = XChaCha20Poly1305Key {
            version: XCHACHA20_POLY1305_KEY_VERSION,
            key_value,
        };
        codec::encode(&key).map_err(|e| CoreError::Internal(e.to_string()))
    }
}

impl KeyManager for XChaCha20Poly1305KeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive> {
        if serialized_key.is_empty() {
            return Err(CoreError::InvalidKey("empty key".to_string()));
        }
        let key: XChaCha20Poly1305Key = codec::decode(serialized_key)
            .map_err(|_| CoreError::InvalidKey("unparseable key".to_string()))?;
        keyset::validate_key_version(key.version, XCHACHA20_POLY1305_KEY_VERSION)?;
        let aead = XChaCha20Poly1305::new(&key.key_value).map_err(CoreError::Crypto)?;
        Ok(Primitive::Aead(Arc::new(aead)))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>> {
        let format = Self::parse_key_format(serialized_key_format)?;
        keyset::validate_key_version(format.version, XCHACHA20_POLY1305_KEY_VERSION)
            .map_err(|_| CoreError::InvalidKeyFormat("unsupported format version".to_string()))?;
        let key_value = random::get_random_bytes(KEY_SIZE).map_err(CoreError::Crypto)?;
        Self::fresh_key(key_value)
    }

    fn derive_key(
        &self,
        serialized_key_format: &[u8],
        pseudorandomness: &mut dyn io::Read,
    ) -> Result<Vec<u8>> {
        let format = Self::parse_key_format(serialized_key_format)?;
        keyset::validate_key_version(format.version, XCHACHA20_POLY1305_KEY_VERSION)
            .map_err(|_| CoreError::InvalidKeyFormat("unsupported format version".to_string()))?;
        let mut key_value = vec![0u8; KEY_SIZE];
        pseudorandomness
            .read_exact(&mut key_value)
            .map_err(|_| CoreError::ShortEntropy)?;
        Self::fresh_key(key_value)
    }

    fn type_url(&self) -> &'static str {
        XCHACHA20_POLY1305_TYPE_URL
    }

    fn key_material_type(&self) -> KeyMaterialType {
        KeyMaterialType::Symmetric
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyloom_crypto::Aead;

    fn as_aead(primitive: Primitive) -> Arc<dyn Aead> {
        match primitive {
            Primitive::Aead(aead) => aead,
            other => panic!("expected an AEAD, got {}", other.kind()),
        }
    }

    #[test]
    fn primitive_round_trips() {
        let serialized = XChaCha20Poly1305KeyManager.new_key(&[]).unwrap();
        let aead = as_aead(XChaCha20Poly1305KeyManager.primitive(&serialized).unwrap());

        let ct = aead.encrypt(b"plaintext", b"ad").unwrap();
        assert_eq!(aead.decrypt(&ct, b"ad").unwrap(), b"plaintext");
    }

    #[test]
    fn primitive_rejects_bad_keys() {
        assert!(XChaCha20Poly1305KeyManager.primitive(&[]).is_err());
        assert!(XChaCha20Poly1305KeyManager.primitive(&[0xde, 0xad]).is_err());

        let wrong_size = codec::encode(&XChaCha20Poly1305Key {
            version: 0,
            key_value: vec![7u8; 16],
        })
        .unwrap();
        assert!(XChaCha20Poly1305KeyManager.primitive(&wrong_size).is_err());

        let future = codec::encode(&XChaCha20Poly1305Key {
            version: 1,
            key_value: vec![7u8; 32],
        })
        .unwrap();
        assert!(matches!(
            XChaCha20Poly1305KeyManager.primitive(&future),
            Err(CoreError::InvalidKey(_))
        ));
    }

    #[test]
    fn new_key_draws_fresh_32_byte_keys() {
        let first: XChaCha20Poly1305Key =
            codec::decode(&XChaCha20Poly1305KeyManager.new_key(&[]).unwrap()).unwrap();
        let second: XChaCha20Poly1305Key =
            codec::decode(&XChaCha20Poly1305KeyManager.new_key(&[]).unwrap()).unwrap();

        assert_eq!(first.version, 0);
        assert_eq!(first.key_value.len(), KEY_SIZE);
        assert_ne!(first.key_value, second.key_value);
    }

    #[test]
    fn new_key_rejects_future_format_versions() {
        let format = codec::encode(&XChaCha20Poly1305KeyFormat { version: 1 }).unwrap();
        assert!(matches!(
            XChaCha20Poly1305KeyManager.new_key(&format),
            Err(CoreError::InvalidKeyFormat(_))
        ));
    }

    #[test]
    fn derive_key_is_deterministic_and_checks_entropy() {
        let stream: Vec<u8> = (0u8..48).collect();

        let mut first_reader = stream.as_slice();
        let first = XChaCha20Poly1305KeyManager
            .derive_key(&[], &mut first_reader)
            .unwrap();
        let mut second_reader = stream.as_slice();
        let second = XChaCha20Poly1305KeyManager
            .derive_key(&[], &mut second_reader)
            .unwrap();
        assert_eq!(first, second);

        let key: XChaCha20Poly1305Key = codec::decode(&first).unwrap();
        assert_eq!(key.key_value, &stream[..KEY_SIZE]);

        let mut empty = io::empty();
        assert!(matches!(
            XChaCha20Poly1305KeyManager.derive_key(&[], &mut empty),
            Err(CoreError::ShortEntropy)
        ));
    }

    #[test]
    fn manager_identity() {
        assert_eq!(
            XChaCha20Poly1305KeyManager.type_url(),
            XCHACHA20_POLY1305_TYPE_URL
        );
        assert!(XChaCha20Poly1305KeyManager.does_support(XCHACHA20_POLY1305_TYPE_URL));
        assert_eq!(
            XChaCha20Poly1305KeyManager.key_material_type(),
            KeyMaterialType::Symmetric
        );
    }
}
