//! Keyset validation, ownership and mutation.

mod handle;
mod manager;

pub use handle::Handle;
pub use manager::Manager;

use crate::errors::{CoreError, Result};
use keyloom_proto::{KeyStatus, Keyset};
use std::collections::HashSet;

/// Check the structural invariants of a keyset: at least one key, unique
/// key ids, known statuses, and a primary that is present and enabled.
pub fn validate(keyset: &Keyset) -> Result<()> {
    if keyset.keys.is_empty() {
        return Err(CoreError::MalformedKeyset(
            "keyset contains no keys".to_string(),
        ));
    }
    let mut ids = HashSet::with_capacity(keyset.keys.len());
    let mut primary_found = false;
    for key in &keyset.keys {
        if !ids.insert(key.key_id) {
            return Err(CoreError::MalformedKeyset(format!(
                "duplicate key id {}",
                key.key_id
            )));
        }
        if key.status == KeyStatus::UnknownStatus {
            return Err(CoreError::MalformedKeyset(format!(
                "key {} has unknown status",
                key.key_id
            )));
        }
        if key.key_id == keyset.primary_key_id {
            if key.status != KeyStatus::Enabled {
                return Err(CoreError::MalformedKeyset(format!(
                    "primary key {} is not enabled",
                    key.key_id
                )));
            }
            primary_found = true;
        }
    }
    if !primary_found {
        return Err(CoreError::MalformedKeyset(format!(
            "primary key {} not found",
            keyset.primary_key_id
        )));
    }
    Ok(())
}

/// Reject key or format versions newer than this implementation supports.
pub fn validate_key_version(version: u32, max_expected: u32) -> Result<()> {
    if version > max_expected {
        return Err(CoreError::InvalidKey(format!(
            "key has version {version}; only versions up to {max_expected} are supported"
        )));
    }
    Ok(())
}
