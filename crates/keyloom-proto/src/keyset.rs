//! Keyset container types: key data, keys, keysets and key templates.

use serde::{Deserialize, Serialize};

/// How the 5-byte output prefix of a key is formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputPrefixType {
    /// `0x01 || big-endian key id`.
    Tink,
    /// `0x00 || big-endian key id`; additionally appends a `0x00` byte to
    /// the data before MAC/sign, bug-compatible with legacy deployments.
    Legacy,
    /// `0x00 || big-endian key id`.
    Crunchy,
    /// No prefix.
    Raw,
    /// Carried by malformed keysets; never valid for use.
    UnknownPrefix,
}

impl OutputPrefixType {
    /// Stable name of the prefix type.
    pub fn name(&self) -> &'static str {
        match self {
            OutputPrefixType::Tink => "TINK",
            OutputPrefixType::Legacy => "LEGACY",
            OutputPrefixType::Crunchy => "CRUNCHY",
            OutputPrefixType::Raw => "RAW",
            OutputPrefixType::UnknownPrefix => "UNKNOWN_PREFIX",
        }
    }
}

/// Lifecycle status of a key within a keyset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyStatus {
    /// The key may be used for all operations.
    Enabled,
    /// The key is retained but must not be used.
    Disabled,
    /// The key material has been destroyed; only metadata remains.
    Destroyed,
    /// Carried by malformed keysets; never valid for use.
    UnknownStatus,
}

impl KeyStatus {
    /// Stable name of the status.
    pub fn name(&self) -> &'static str {
        match self {
            KeyStatus::Enabled => "ENABLED",
            KeyStatus::Disabled => "DISABLED",
            KeyStatus::Destroyed => "DESTROYED",
            KeyStatus::UnknownStatus => "UNKNOWN_STATUS",
        }
    }
}

/// Classification of the key material held in a [`KeyData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyMaterialType {
    /// Symmetric secret key.
    Symmetric,
    /// Private half of an asymmetric key pair.
    AsymmetricPrivate,
    /// Public half of an asymmetric key pair.
    AsymmetricPublic,
    /// Key material held by a remote service.
    Remote,
    /// Unknown material type.
    UnknownKeyMaterial,
}

/// Serialized key material tagged by its type URL.
///
/// The `value` payload is opaque to everything except the key manager
/// registered for `type_url`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyData {
    /// Stable identifier of the key type, e.g.
    /// `"type.googleapis.com/google.crypto.tink.HmacKey"`.
    pub type_url: String,
    /// Canonically serialized key message. May contain secret material.
    pub value: Vec<u8>,
    /// Classification of the contained material.
    pub key_material_type: KeyMaterialType,
}

/// A single key within a keyset.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// The key material and its type.
    pub key_data: KeyData,
    /// Lifecycle status.
    pub status: KeyStatus,
    /// Identifier, unique within the keyset.
    pub key_id: u32,
    /// How this key's output prefix is formed.
    pub output_prefix_type: OutputPrefixType,
}

/// An ordered collection of keys with a designated primary.
///
/// Invariant: exactly one enabled key has `key_id == primary_key_id`, and
/// key ids are unique. Enforced by keyset validation, not by construction.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyset {
    /// Id of the primary key. New outputs are produced under this key.
    pub primary_key_id: u32,
    /// The keys, in insertion order.
    pub keys: Vec<Key>,
}

/// Recipe for minting fresh keys of one algorithm and prefix type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTemplate {
    /// Type URL of the key manager that understands `value`.
    pub type_url: String,
    /// Canonically serialized key format message.
    pub value: Vec<u8>,
    /// Prefix type stamped onto keys minted from this template.
    pub output_prefix_type: OutputPrefixType,
}

/// Public metadata of a single key; carries no key material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInfo {
    /// Type URL of the key.
    pub type_url: String,
    /// Lifecycle status.
    pub status: KeyStatus,
    /// Key id.
    pub key_id: u32,
    /// Prefix type.
    pub output_prefix_type: OutputPrefixType,
}

/// Public metadata of a keyset; carries no key material.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeysetInfo {
    /// Id of the primary key.
    pub primary_key_id: u32,
    /// Metadata of every key, in keyset order.
    pub key_info: Vec<KeyInfo>,
}

impl Keyset {
    /// Derive the public metadata view of this keyset.
    pub fn info(&self) -> KeysetInfo {
        KeysetInfo {
            primary_key_id: self.primary_key_id,
            key_info: self
                .keys
                .iter()
                .map(|key| KeyInfo {
                    type_url: key.key_data.type_url.clone(),
                    status: key.status,
                    key_id: key.key_id,
                    output_prefix_type: key.output_prefix_type,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key(key_id: u32) -> Key {
        Key {
            key_data: KeyData {
                type_url: "type.googleapis.com/google.crypto.tink.HmacKey".to_string(),
                value: vec![1, 2, 3],
                key_material_type: KeyMaterialType::Symmetric,
            },
            status: KeyStatus::Enabled,
            key_id,
            output_prefix_type: OutputPrefixType::Tink,
        }
    }

    #[test]
    fn keyset_info_mirrors_keys_without_material() {
        let keyset = Keyset {
            primary_key_id: 7,
            keys: vec![test_key(7), test_key(11)],
        };

        let info = keyset.info();
        assert_eq!(info.primary_key_id, 7);
        assert_eq!(info.key_info.len(), 2);
        assert_eq!(info.key_info[0].key_id, 7);
        assert_eq!(info.key_info[1].key_id, 11);
        assert_eq!(info.key_info[0].status, KeyStatus::Enabled);
        assert_eq!(
            info.key_info[0].type_url,
            "type.googleapis.com/google.crypto.tink.HmacKey"
        );
    }

    #[test]
    fn keyset_round_trips_through_codec() {
        let keyset = Keyset {
            primary_key_id: 42,
            keys: vec![test_key(42)],
        };

        let bytes = crate::codec::encode(&keyset).unwrap();
        let decoded: Keyset = crate::codec::decode(&bytes).unwrap();
        assert_eq!(decoded, keyset);
    }

    #[test]
    fn prefix_type_names_are_stable() {
        assert_eq!(OutputPrefixType::Tink.name(), "TINK");
        assert_eq!(OutputPrefixType::Legacy.name(), "LEGACY");
        assert_eq!(OutputPrefixType::Crunchy.name(), "CRUNCHY");
        assert_eq!(OutputPrefixType::Raw.name(), "RAW");
    }
}
