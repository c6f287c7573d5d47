//! Process-wide key-manager registry.
//!
//! Each algorithm family registers its manager from an explicit `init`
//! call during bootstrap. Registration is serialized behind a write lock;
//! lookups take the read lock and after initialization the map never
//! changes.

use crate::errors::{CoreError, Result};
use crate::key_manager::{KeyManager, Primitive};
use keyloom_proto::{KeyData, KeyTemplate};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

static KEY_MANAGERS: Lazy<RwLock<HashMap<String, Arc<dyn KeyManager>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register a key manager under its type URL.
///
/// Registering the same manager instance twice is a no-op; registering a
/// different instance for an already-claimed type URL fails.
pub fn register_key_manager(manager: Arc<dyn KeyManager>) -> Result<()> {
    let type_url = manager.type_url();
    let mut managers = KEY_MANAGERS.write();
    match managers.get(type_url) {
        Some(existing) if same_instance(existing, &manager) => Ok(()),
        Some(_) => {
            warn!(type_url, "rejecting conflicting key manager registration");
            Err(CoreError::AlreadyRegistered(type_url.to_string()))
        }
        None => {
            debug!(type_url, "registered key manager");
            managers.insert(type_url.to_string(), manager);
            Ok(())
        }
    }
}

// Compare allocation addresses; comparing fat pointers directly can give
// false negatives when vtables are duplicated across codegen units.
fn same_instance(a: &Arc<dyn KeyManager>, b: &Arc<dyn KeyManager>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// Look up the key manager for a type URL.
pub fn get_key_manager(type_url: &str) -> Result<Arc<dyn KeyManager>> {
    KEY_MANAGERS
        .read()
        .get(type_url)
        .cloned()
        .ok_or_else(|| CoreError::NotFound(type_url.to_string()))
}

/// Generate a fresh serialized key for the template's type URL.
pub fn new_key(template: &KeyTemplate) -> Result<Vec<u8>> {
    get_key_manager(&template.type_url)?.new_key(&template.value)
}

/// Generate fresh [`KeyData`] for the template's type URL.
pub fn new_key_data(template: &KeyTemplate) -> Result<KeyData> {
    get_key_manager(&template.type_url)?.new_key_data(&template.value)
}

/// Construct the primitive for a serialized key.
pub fn primitive(key_data: &KeyData) -> Result<Primitive> {
    get_key_manager(&key_data.type_url)?.primitive(&key_data.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::EchoMacManager;
    use keyloom_proto::KeyMaterialType;

    #[test]
    fn lookup_returns_registered_manager() {
        let manager = Arc::new(EchoMacManager {
            type_url: "type.googleapis.com/test.registry.Lookup",
        });
        register_key_manager(manager.clone()).unwrap();

        let found = get_key_manager("type.googleapis.com/test.registry.Lookup").unwrap();
        assert!(found.does_support("type.googleapis.com/test.registry.Lookup"));
        assert!(!found.does_support("type.googleapis.com/test.registry.Other"));
    }

    #[test]
    fn lookup_misses_with_not_found() {
        let err = get_key_manager("type.googleapis.com/test.registry.Missing").unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn same_instance_registration_is_idempotent() {
        let manager = Arc::new(EchoMacManager {
            type_url: "type.googleapis.com/test.registry.Idempotent",
        });
        register_key_manager(manager.clone()).unwrap();
        register_key_manager(manager).unwrap();
    }

    #[test]
    fn conflicting_registration_is_rejected() {
        let first = Arc::new(EchoMacManager {
            type_url: "type.googleapis.com/test.registry.Conflict",
        });
        let second = Arc::new(EchoMacManager {
            type_url: "type.googleapis.com/test.registry.Conflict",
        });
        register_key_manager(first).unwrap();
        let err = register_key_manager(second).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyRegistered(_)));
    }

    #[test]
    fn new_key_data_goes_through_the_manager() {
        let manager = Arc::new(EchoMacManager {
            type_url: "type.googleapis.com/test.registry.NewKeyData",
        });
        register_key_manager(manager).unwrap();

        let template = KeyTemplate {
            type_url: "type.googleapis.com/test.registry.NewKeyData".to_string(),
            value: Vec::new(),
            output_prefix_type: keyloom_proto::OutputPrefixType::Tink,
        };
        let key_data = new_key_data(&template).unwrap();
        assert_eq!(key_data.type_url, template.type_url);
        assert_eq!(key_data.value.len(), 16);
        assert_eq!(key_data.key_material_type, KeyMaterialType::Symmetric);

        let serialized = new_key(&template).unwrap();
        assert_eq!(serialized.len(), 16);
    }

    #[test]
    fn primitive_dispatches_by_type_url() {
        let manager = Arc::new(EchoMacManager {
            type_url: "type.googleapis.com/test.registry.Primitive",
        });
        register_key_manager(manager).unwrap();

        let key_data = KeyData {
            type_url: "type.googleapis.com/test.registry.Primitive".to_string(),
            value: vec![9, 9],
            key_material_type: KeyMaterialType::Symmetric,
        };
        let primitive = primitive(&key_data).unwrap();
        assert_eq!(primitive.kind(), "MAC");
        let Primitive::Mac(mac) = primitive else {
            panic!("expected a MAC");
        };
        assert_eq!(mac.compute_mac(b"x").unwrap(), vec![9, 9]);
    }
}
