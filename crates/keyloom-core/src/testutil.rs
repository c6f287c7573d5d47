//! Test-only fakes shared across the crate's test modules.

use crate::errors::{CoreError, Result};
use crate::key_manager::{KeyManager, Primitive};
use keyloom_crypto::{random, CryptoError, Mac};
use keyloom_proto::{KeyMaterialType, KeyTemplate, OutputPrefixType};
use std::io;
use std::sync::Arc;

/// MAC whose tag is its key bytes; enough to observe routing decisions.
pub(crate) struct EchoMac(pub Vec<u8>);

impl Mac for EchoMac {
    fn compute_mac(&self, _data: &[u8]) -> keyloom_crypto::Result<Vec<u8>> {
        Ok(self.0.clone())
    }

    fn verify_mac(&self, mac: &[u8], _data: &[u8]) -> keyloom_crypto::Result<()> {
        if mac == self.0.as_slice() {
            Ok(())
        } else {
            Err(CryptoError::InvalidMac)
        }
    }
}

/// Key manager over opaque random 16-byte keys producing [`EchoMac`]s.
pub(crate) struct EchoMacManager {
    pub type_url: &'static str,
}

impl KeyManager for EchoMacManager {
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive> {
        if serialized_key.is_empty() {
            return Err(CoreError::InvalidKey("empty key".to_string()));
        }
        Ok(Primitive::Mac(Arc::new(EchoMac(serialized_key.to_vec()))))
    }

    fn new_key(&self, _serialized_key_format: &[u8]) -> Result<Vec<u8>> {
        random::get_random_bytes(16).map_err(CoreError::Crypto)
    }

    fn derive_key(
        &self,
        _serialized_key_format: &[u8],
        pseudorandomness: &mut dyn io::Read,
    ) -> Result<Vec<u8>> {
        let mut key = vec![0u8; 16];
        pseudorandomness
            .read_exact(&mut key)
            .map_err(|_| CoreError::ShortEntropy)?;
        Ok(key)
    }

    fn type_url(&self) -> &'static str {
        self.type_url
    }

    fn key_material_type(&self) -> KeyMaterialType {
        KeyMaterialType::Symmetric
    }
}

/// Register an [`EchoMacManager`] under `type_url`, tolerating repeats
/// across tests in the same process.
pub(crate) fn register_echo_manager(type_url: &'static str) {
    let _ = crate::registry::register_key_manager(Arc::new(EchoMacManager { type_url }));
}

/// Template pointing at an [`EchoMacManager`].
pub(crate) fn echo_template(type_url: &str, prefix: OutputPrefixType) -> KeyTemplate {
    KeyTemplate {
        type_url: type_url.to_string(),
        value: Vec::new(),
        output_prefix_type: prefix,
    }
}

/// Extractor narrowing a [`Primitive`] to its MAC capability.
pub(crate) fn extract_mac(primitive: Primitive) -> Result<Arc<dyn Mac>> {
    match primitive {
        Primitive::Mac(mac) => Ok(mac),
        other => Err(CoreError::WrongPrimitive {
            expected: "MAC",
            actual: other.kind(),
        }),
    }
}
