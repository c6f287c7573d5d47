//! Key manager for HMAC keys.

use keyloom_core::key_manager::{KeyManager, Primitive};
use keyloom_core::{keyset, CoreError, Result};
use keyloom_crypto::{random, validate_hmac_params, Hmac};
use keyloom_proto::{codec, HmacKey, HmacKeyFormat, KeyMaterialType};
use std::io;
use std::sync::Arc;

/// Version of HMAC keys this manager produces and accepts.
pub const HMAC_KEY_VERSION: u32 = 0;

/// Type URL of HMAC keys.
pub const HMAC_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.HmacKey";

/// Generates new HMAC keys and produces HMAC primitives from serialized
/// keys.
pub struct HmacKeyManager;

impl HmacKeyManager {
    // Only the version is checked here; parameter validation belongs to
    // the HMAC primitive and runs during construction.
    fn validate_key(&self, key: &HmacKey) -> Result<()> {
        keyset::validate_key_version(key.version, HMAC_KEY_VERSION)?;
        validate_hmac_params(
            key.params.hash.name(),
            key.key_value.len() as u32,
            key.params.tag_size,
        )
        .map_err(CoreError::Crypto)
    }

    fn validate_key_format(&self, format: &HmacKeyFormat) -> Result<()> {
        validate_hmac_params(
            format.params.hash.name(),
            format.key_size,
            format.params.tag_size,
        )
        .map_err(CoreError::Crypto)
    }

    fn parse_key_format(serialized_key_format: &[u8]) -> Result<HmacKeyFormat> {
        if serialized_key_format.is_empty() {
            return Err(CoreError::InvalidKeyFormat("empty key format".to_string()));
        }
        codec::decode(serialized_key_format)
            .map_err(|_| CoreError::InvalidKeyFormat("unparseable key format".to_string()))
    }
}

impl KeyManager for HmacKeyManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive> {
        if serialized_key.is_empty() {
            return Err(CoreError::InvalidKey("empty key".to_string()));
        }
        let key: HmacKey = codec::decode(serialized_key)
            .map_err(|_| CoreError::InvalidKey("unparseable key".to_string()))?;
        self.validate_key(&key)?;
        let hmac = Hmac::new(key.params.hash.name(), &key.key_value, key.params.tag_size)
            .map_err(CoreError::Crypto)?;
        Ok(Primitive::Mac(Arc::new(hmac)))
    }

    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>> {
        let format = Self::parse_key_format(serialized_key_format)?;
        self.validate_key_format(&format)?;
        let key_value =
            random::get_random_bytes(format.key_size as usize).map_err(CoreError::Crypto)?;
        let key = HmacKey {
            version: HMAC_KEY_VERSION,
            params: format.params,
            key_value,
        };
        codec::encode(&key).map_err(|e| CoreError::Internal(e.to_string()))
    }

    fn derive_key(
        &self,
        serialized_key_format: &[u8],
        pseudorandomness: &mut dyn io::Read,
    ) -> Result<Vec<u8>> {
        let format = Self::parse_key_format(serialized_key_format)?;
        self.validate_key_format(&format)?;
        keyset::validate_key_version(format.version, HMAC_KEY_VERSION)
            .map_err(|_| CoreError::InvalidKeyFormat("unsupported format version".to_string()))?;

        let mut key_value = vec![0u8; format.key_size as usize];
        pseudorandomness
            .read_exact(&mut key_value)
            .map_err(|_| CoreError::ShortEntropy)?;
        let key = HmacKey {
            version: HMAC_KEY_VERSION,
            params: format.params,
            key_value,
        };
        codec::encode(&key).map_err(|e| CoreError::Internal(e.to_string()))
    }

    fn type_url(&self) -> &'static str {
        HMAC_TYPE_URL
    }

    fn key_material_type(&self) -> KeyMaterialType {
        KeyMaterialType::Symmetric
    }
}
