//! The key-manager contract and the tagged primitive variant.

use crate::errors::Result;
use keyloom_crypto::{
    Aead, DeterministicAead, HybridDecrypt, HybridEncrypt, Mac, Signer, Verifier,
};
use keyloom_proto::{KeyData, KeyMaterialType};
use std::io;
use std::sync::Arc;

/// A constructed primitive, tagged by its capability.
///
/// Key managers return this variant; each wrapper extracts the one
/// capability it implements and rejects the rest.
#[derive(Clone)]
pub enum Primitive {
    /// Message authentication code.
    Mac(Arc<dyn Mac>),
    /// Authenticated encryption with associated data.
    Aead(Arc<dyn Aead>),
    /// Deterministic AEAD.
    DeterministicAead(Arc<dyn DeterministicAead>),
    /// Hybrid public-key encryption.
    HybridEncrypt(Arc<dyn HybridEncrypt>),
    /// Hybrid public-key decryption.
    HybridDecrypt(Arc<dyn HybridDecrypt>),
    /// Digital-signature producer.
    Signer(Arc<dyn Signer>),
    /// Digital-signature verifier.
    Verifier(Arc<dyn Verifier>),
}

impl Primitive {
    /// Name of the capability, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Mac(_) => "MAC",
            Primitive::Aead(_) => "AEAD",
            Primitive::DeterministicAead(_) => "DeterministicAEAD",
            Primitive::HybridEncrypt(_) => "HybridEncrypt",
            Primitive::HybridDecrypt(_) => "HybridDecrypt",
            Primitive::Signer(_) => "Signer",
            Primitive::Verifier(_) => "Verifier",
        }
    }
}

/// Owner of one key type's parse/validate/generate/derive lifecycle.
///
/// A key manager is fetched from the registry exclusively by its type URL;
/// serialized keys and formats stay opaque byte strings everywhere else.
pub trait KeyManager: Send + Sync {
    /// Parse and validate `serialized_key`, then construct the primitive.
    ///
    /// Empty input fails.
    fn primitive(&self, serialized_key: &[u8]) -> Result<Primitive>;

    /// Generate a fresh key according to `serialized_key_format`, returning
    /// it in serialized form at version 0.
    fn new_key(&self, serialized_key_format: &[u8]) -> Result<Vec<u8>>;

    /// Like [`KeyManager::new_key`], wrapped in a [`KeyData`] tagged with
    /// this manager's type URL and key material type.
    fn new_key_data(&self, serialized_key_format: &[u8]) -> Result<KeyData> {
        let serialized_key = self.new_key(serialized_key_format)?;
        Ok(KeyData {
            type_url: self.type_url().to_string(),
            value: serialized_key,
            key_material_type: self.key_material_type(),
        })
    }

    /// Like [`KeyManager::new_key`], but draw the key material from
    /// `pseudorandomness` instead of the system CSPRNG.
    ///
    /// Reads exactly the declared key size; fails with `ShortEntropy` when
    /// the source yields fewer bytes.
    fn derive_key(
        &self,
        serialized_key_format: &[u8],
        pseudorandomness: &mut dyn io::Read,
    ) -> Result<Vec<u8>>;

    /// Whether this manager handles keys of the given type URL.
    fn does_support(&self, type_url: &str) -> bool {
        type_url == self.type_url()
    }

    /// The type URL of keys this manager handles.
    fn type_url(&self) -> &'static str;

    /// Classification of the key material this manager produces.
    fn key_material_type(&self) -> KeyMaterialType;
}

impl std::fmt::Debug for dyn KeyManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyManager")
            .field("type_url", &self.type_url())
            .finish()
    }
}
