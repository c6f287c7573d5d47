//! Keyset mutation: adding keys, rotating the primary, status changes.

use crate::errors::{CoreError, Result};
use crate::keyset::{self, Handle};
use crate::registry;
use keyloom_crypto::random;
use keyloom_proto::{Key, KeyStatus, KeyTemplate, Keyset, OutputPrefixType};
use std::collections::HashMap;

/// Builder and mutator for keysets.
///
/// A manager owns a keyset under construction; [`Manager::handle`]
/// validates it and hands out an owning [`Handle`]. Concurrent mutation of
/// one manager is not supported.
pub struct Manager {
    keyset: Keyset,
    annotations: HashMap<String, String>,
}

impl Manager {
    /// Start with an empty keyset.
    pub fn new() -> Manager {
        Manager {
            keyset: Keyset {
                primary_key_id: 0,
                keys: Vec::new(),
            },
            annotations: HashMap::new(),
        }
    }

    /// Take over the keyset owned by `handle` for further mutation.
    pub fn from_handle(handle: Handle) -> Manager {
        let annotations = handle.annotations().clone();
        Manager {
            keyset: handle.keyset().clone(),
            annotations,
        }
    }

    /// Mint a fresh key from the template and append it to the keyset.
    ///
    /// The new key is enabled but not primary; returns its id.
    pub fn add(&mut self, template: &KeyTemplate) -> Result<u32> {
        if template.output_prefix_type == OutputPrefixType::UnknownPrefix {
            return Err(CoreError::InvalidKeyFormat(
                "template has unknown output prefix type".to_string(),
            ));
        }
        let key_data = registry::new_key_data(template)?;
        let key_id = self.new_key_id()?;
        self.keyset.keys.push(Key {
            key_data,
            status: KeyStatus::Enabled,
            key_id,
            output_prefix_type: template.output_prefix_type,
        });
        Ok(key_id)
    }

    /// Designate an existing enabled key as the primary.
    pub fn set_primary(&mut self, key_id: u32) -> Result<()> {
        let key = self
            .keyset
            .keys
            .iter()
            .find(|key| key.key_id == key_id)
            .ok_or(CoreError::KeyNotFound(key_id))?;
        if key.status != KeyStatus::Enabled {
            return Err(CoreError::MalformedKeyset(format!(
                "cannot set key {} with status {} as primary",
                key_id,
                key.status.name()
            )));
        }
        self.keyset.primary_key_id = key_id;
        Ok(())
    }

    /// Re-enable a disabled key. Destroyed keys cannot come back.
    pub fn enable(&mut self, key_id: u32) -> Result<()> {
        let key = self.key_mut(key_id)?;
        match key.status {
            KeyStatus::Enabled | KeyStatus::Disabled => {
                key.status = KeyStatus::Enabled;
                Ok(())
            }
            _ => Err(CoreError::MalformedKeyset(format!(
                "cannot enable key {} with status {}",
                key_id,
                key.status.name()
            ))),
        }
    }

    /// Disable an enabled key. The primary cannot be disabled; rotate
    /// first.
    pub fn disable(&mut self, key_id: u32) -> Result<()> {
        if key_id == self.keyset.primary_key_id {
            return Err(CoreError::MalformedKeyset(format!(
                "cannot disable primary key {key_id}"
            )));
        }
        let key = self.key_mut(key_id)?;
        match key.status {
            KeyStatus::Enabled | KeyStatus::Disabled => {
                key.status = KeyStatus::Disabled;
                Ok(())
            }
            _ => Err(CoreError::MalformedKeyset(format!(
                "cannot disable key {} with status {}",
                key_id,
                key.status.name()
            ))),
        }
    }

    /// Remove a key from the keyset entirely. The primary cannot be
    /// deleted.
    pub fn delete(&mut self, key_id: u32) -> Result<()> {
        if key_id == self.keyset.primary_key_id {
            return Err(CoreError::MalformedKeyset(format!(
                "cannot delete primary key {key_id}"
            )));
        }
        let before = self.keyset.keys.len();
        self.keyset.keys.retain(|key| key.key_id != key_id);
        if self.keyset.keys.len() == before {
            return Err(CoreError::KeyNotFound(key_id));
        }
        Ok(())
    }

    /// Validate the keyset and hand out an owning handle over a copy.
    pub fn handle(&self) -> Result<Handle> {
        keyset::validate(&self.keyset)?;
        Ok(Handle::from_parts(
            self.keyset.clone(),
            self.annotations.clone(),
        ))
    }

    fn key_mut(&mut self, key_id: u32) -> Result<&mut Key> {
        self.keyset
            .keys
            .iter_mut()
            .find(|key| key.key_id == key_id)
            .ok_or(CoreError::KeyNotFound(key_id))
    }

    fn new_key_id(&self) -> Result<u32> {
        loop {
            let key_id = random::get_random_u32().map_err(CoreError::Crypto)?;
            if !self.keyset.keys.iter().any(|key| key.key_id == key_id) {
                return Ok(key_id);
            }
        }
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
