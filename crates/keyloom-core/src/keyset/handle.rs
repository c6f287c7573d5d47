//! The user-facing keyset owner.

use crate::errors::{CoreError, Result};
use crate::key_manager::Primitive;
use crate::keyset::{self, Manager};
use crate::primitive_set::PrimitiveSet;
use crate::registry;
use keyloom_proto::{KeyStatus, KeyTemplate, Keyset, KeysetInfo};
use std::collections::HashMap;

/// Exclusive owner of a keyset.
///
/// All minting and mutation go through a handle (or a [`Manager`] built
/// from one). Secret key material does not leave a handle except through
/// the explicit operations in [`crate::insecure`].
pub struct Handle {
    keyset: Keyset,
    annotations: HashMap<String, String>,
}

impl Handle {
    /// Mint a fresh single-key keyset from a template and take ownership
    /// of it. The new key is enabled and primary.
    pub fn new(template: &KeyTemplate) -> Result<Handle> {
        Handle::new_with_annotations(template, HashMap::new())
    }

    /// Like [`Handle::new`], with monitoring annotations attached.
    ///
    /// Non-empty annotations opt wrapped primitives built from this handle
    /// in to monitoring.
    pub fn new_with_annotations(
        template: &KeyTemplate,
        annotations: HashMap<String, String>,
    ) -> Result<Handle> {
        let mut manager = Manager::new();
        let key_id = manager.add(template)?;
        manager.set_primary(key_id)?;
        let mut handle = manager.handle()?;
        handle.annotations = annotations;
        Ok(handle)
    }

    pub(crate) fn from_parts(keyset: Keyset, annotations: HashMap<String, String>) -> Handle {
        Handle {
            keyset,
            annotations,
        }
    }

    pub(crate) fn keyset(&self) -> &Keyset {
        &self.keyset
    }

    /// Public metadata of the owned keyset; carries no key material.
    pub fn keyset_info(&self) -> KeysetInfo {
        self.keyset.info()
    }

    /// Monitoring annotations attached to this handle.
    pub fn annotations(&self) -> &HashMap<String, String> {
        &self.annotations
    }

    /// Resolve the keyset into a primitive set for one capability.
    ///
    /// `extract` narrows the registry's tagged [`Primitive`] to the
    /// capability the caller implements; wrappers pass a match on their own
    /// variant. Only enabled keys participate. Any key whose primitive
    /// cannot be constructed fails the whole build: a keyset with an
    /// unconstructible key is malformed.
    pub fn primitives<P>(
        &self,
        extract: impl Fn(Primitive) -> Result<P>,
    ) -> Result<PrimitiveSet<P>> {
        keyset::validate(&self.keyset)?;
        let mut set = PrimitiveSet::new();
        set.set_annotations(self.annotations.clone());
        for key in &self.keyset.keys {
            if key.status != KeyStatus::Enabled {
                continue;
            }
            let primitive = registry::primitive(&key.key_data)?;
            let entry = set.add(extract(primitive)?, key)?;
            if key.key_id == self.keyset.primary_key_id {
                set.set_primary(entry);
            }
        }
        if set.primary().is_none() {
            // validate() above guarantees an enabled primary key.
            return Err(CoreError::Internal(
                "primitive set built without a primary".to_string(),
            ));
        }
        Ok(set)
    }
}
