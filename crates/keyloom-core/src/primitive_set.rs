//! Capability-specific resolved view of a keyset.
//!
//! Entries are pre-indexed by their output prefix so the wrapped primitive
//! routes in O(1); RAW entries live under the empty prefix. A set is
//! immutable once its build completes and can be shared freely across
//! threads when the contained primitives are thread-safe.

use crate::cryptofmt;
use crate::errors::{CoreError, Result};
use keyloom_proto::{Key, KeyStatus, OutputPrefixType};
use std::collections::HashMap;
use std::sync::Arc;

/// One enabled key of a keyset, resolved for a single capability.
#[derive(Debug)]
pub struct Entry<P> {
    primitive: P,
    key_id: u32,
    status: KeyStatus,
    prefix_type: OutputPrefixType,
    prefix: Vec<u8>,
    type_url: String,
}

impl<P> Entry<P> {
    /// The constructed primitive.
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Id of the key this entry was built from.
    pub fn key_id(&self) -> u32 {
        self.key_id
    }

    /// Status of the key. Always enabled in a built set.
    pub fn status(&self) -> KeyStatus {
        self.status
    }

    /// Prefix type of the key.
    pub fn prefix_type(&self) -> OutputPrefixType {
        self.prefix_type
    }

    /// Output prefix bytes; empty for RAW keys.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Type URL of the key.
    pub fn type_url(&self) -> &str {
        &self.type_url
    }
}

/// A resolved, capability-specific view of a keyset.
pub struct PrimitiveSet<P> {
    primary: Option<Arc<Entry<P>>>,
    entries: HashMap<Vec<u8>, Vec<Arc<Entry<P>>>>,
    annotations: HashMap<String, String>,
}

impl<P> PrimitiveSet<P> {
    /// Create an empty set.
    pub fn new() -> Self {
        PrimitiveSet {
            primary: None,
            entries: HashMap::new(),
            annotations: HashMap::new(),
        }
    }

    /// Add a resolved primitive for an enabled key.
    ///
    /// The entry's prefix is computed from the key's prefix type and id.
    pub fn add(&mut self, primitive: P, key: &Key) -> Result<Arc<Entry<P>>> {
        if key.status != KeyStatus::Enabled {
            return Err(CoreError::MalformedKeyset(format!(
                "cannot add key {} with status {} to a primitive set",
                key.key_id,
                key.status.name()
            )));
        }
        let prefix = cryptofmt::output_prefix(key)?;
        let entry = Arc::new(Entry {
            primitive,
            key_id: key.key_id,
            status: key.status,
            prefix_type: key.output_prefix_type,
            prefix: prefix.clone(),
            type_url: key.key_data.type_url.clone(),
        });
        self.entries.entry(prefix).or_default().push(entry.clone());
        Ok(entry)
    }

    /// Mark an entry as the primary of this set.
    pub fn set_primary(&mut self, entry: Arc<Entry<P>>) {
        self.primary = Some(entry);
    }

    /// The primary entry, if one has been designated.
    pub fn primary(&self) -> Option<&Arc<Entry<P>>> {
        self.primary.as_ref()
    }

    /// Entries whose keys share the given output prefix, in insertion
    /// order. Empty when no key matches.
    pub fn entries_for_prefix(&self, prefix: &[u8]) -> &[Arc<Entry<P>>] {
        self.entries.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// RAW entries, in insertion order.
    pub fn raw_entries(&self) -> &[Arc<Entry<P>>] {
        self.entries_for_prefix(&[])
    }

    /// All entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &Arc<Entry<P>>> {
        self.entries.values().flatten()
    }

    /// Annotations of the keyset this set was built from. Non-empty
    /// annotations opt the wrapped primitive in to monitoring.
    pub fn annotations(&self) -> &HashMap<String, String> {
        &self.annotations
    }

    pub(crate) fn set_annotations(&mut self, annotations: HashMap<String, String>) {
        self.annotations = annotations;
    }
}

impl<P> Default for PrimitiveSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyloom_proto::{KeyData, KeyMaterialType};

    fn key(key_id: u32, prefix_type: OutputPrefixType, status: KeyStatus) -> Key {
        Key {
            key_data: KeyData {
                type_url: "type.googleapis.com/google.crypto.tink.HmacKey".to_string(),
                value: Vec::new(),
                key_material_type: KeyMaterialType::Symmetric,
            },
            status,
            key_id,
            output_prefix_type: prefix_type,
        }
    }

    #[test]
    fn entries_are_bucketed_by_prefix() {
        let mut set: PrimitiveSet<u32> = PrimitiveSet::new();
        set.add(1, &key(1, OutputPrefixType::Tink, KeyStatus::Enabled))
            .unwrap();
        set.add(2, &key(2, OutputPrefixType::Tink, KeyStatus::Enabled))
            .unwrap();

        let prefix = [0x01, 0x00, 0x00, 0x00, 0x01];
        let entries = set.entries_for_prefix(&prefix);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].key_id(), 1);
        assert_eq!(entries[0].prefix(), prefix);

        assert!(set.entries_for_prefix(&[0x01, 0, 0, 0, 9]).is_empty());
    }

    #[test]
    fn colliding_prefixes_preserve_insertion_order() {
        // LEGACY and CRUNCHY keys with the same id share a prefix.
        let mut set: PrimitiveSet<&str> = PrimitiveSet::new();
        set.add("legacy", &key(5, OutputPrefixType::Legacy, KeyStatus::Enabled))
            .unwrap();
        set.add("crunchy", &key(5, OutputPrefixType::Crunchy, KeyStatus::Enabled))
            .unwrap();

        let entries = set.entries_for_prefix(&[0x00, 0, 0, 0, 5]);
        assert_eq!(entries.len(), 2);
        assert_eq!(*entries[0].primitive(), "legacy");
        assert_eq!(*entries[1].primitive(), "crunchy");
    }

    #[test]
    fn raw_entries_live_under_the_empty_prefix() {
        let mut set: PrimitiveSet<u32> = PrimitiveSet::new();
        set.add(1, &key(1, OutputPrefixType::Raw, KeyStatus::Enabled))
            .unwrap();
        set.add(2, &key(2, OutputPrefixType::Tink, KeyStatus::Enabled))
            .unwrap();

        let raw = set.raw_entries();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].key_id(), 1);
        assert!(raw[0].prefix().is_empty());
    }

    #[test]
    fn disabled_keys_are_rejected() {
        let mut set: PrimitiveSet<u32> = PrimitiveSet::new();
        let err = set
            .add(1, &key(1, OutputPrefixType::Tink, KeyStatus::Disabled))
            .unwrap_err();
        assert!(matches!(err, CoreError::MalformedKeyset(_)));
    }

    #[test]
    fn primary_is_tracked() {
        let mut set: PrimitiveSet<u32> = PrimitiveSet::new();
        let entry = set
            .add(7, &key(3, OutputPrefixType::Tink, KeyStatus::Enabled))
            .unwrap();
        assert!(set.primary().is_none());
        set.set_primary(entry);
        assert_eq!(set.primary().unwrap().key_id(), 3);
    }
}
