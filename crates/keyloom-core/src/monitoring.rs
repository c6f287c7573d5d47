//! Pluggable monitoring seam for wrapped primitives.
//!
//! A wrapped primitive logs each successful operation with the key id that
//! served it and the length of the processed data, and each failure once.
//! Keysets without annotations get [`NoopLogger`] directly, with no
//! allocation and no lock taken; annotated keysets go through the
//! registered [`MonitoringClient`].

use crate::errors::{CoreError, Result};
use crate::primitive_set::PrimitiveSet;
use keyloom_proto::{KeyStatus, OutputPrefixType};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Sink for per-operation monitoring events.
pub trait MonitoringLogger: Send + Sync {
    /// Record a successful operation under `key_id` over `num_bytes` of
    /// input.
    fn log(&self, key_id: u32, num_bytes: usize);

    /// Record a failed operation.
    fn log_failure(&self);
}

/// Logger that drops everything. The default for unannotated keysets.
pub struct NoopLogger;

impl MonitoringLogger for NoopLogger {
    fn log(&self, _key_id: u32, _num_bytes: usize) {}

    fn log_failure(&self) {}
}

/// Public metadata of one key, as seen by monitoring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitoringKeyInfo {
    /// Key id.
    pub key_id: u32,
    /// Key status; always enabled for keys reported from a primitive set.
    pub status: KeyStatus,
    /// Type URL of the key.
    pub type_url: String,
    /// Output prefix type of the key.
    pub prefix_type: OutputPrefixType,
}

/// Public metadata of the keyset behind a wrapped primitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitoringKeysetInfo {
    /// Id of the primary key.
    pub primary_key_id: u32,
    /// Metadata of the enabled keys, ordered by key id.
    pub entries: Vec<MonitoringKeyInfo>,
    /// Annotations the keyset was created with.
    pub annotations: HashMap<String, String>,
}

/// What a logger is scoped to: one API function of one primitive over one
/// keyset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonitoringContext {
    /// Primitive name, e.g. `"mac"`.
    pub primitive: &'static str,
    /// API function name, e.g. `"compute"`.
    pub api_function: &'static str,
    /// Metadata of the keyset being served.
    pub keyset_info: MonitoringKeysetInfo,
}

/// Factory for scoped loggers.
pub trait MonitoringClient: Send + Sync {
    /// Create a logger scoped to `context`.
    fn new_logger(&self, context: &MonitoringContext) -> Result<Box<dyn MonitoringLogger>>;
}

struct NoopClient;

impl MonitoringClient for NoopClient {
    fn new_logger(&self, _context: &MonitoringContext) -> Result<Box<dyn MonitoringLogger>> {
        Ok(Box::new(NoopLogger))
    }
}

static CLIENT: Lazy<RwLock<Option<Arc<dyn MonitoringClient>>>> = Lazy::new(|| RwLock::new(None));
static NOOP_CLIENT: Lazy<Arc<dyn MonitoringClient>> = Lazy::new(|| Arc::new(NoopClient));

/// Install the process-wide monitoring client. Fails if one is already
/// installed; [`clear_monitoring_client`] removes it.
pub fn register_monitoring_client(client: Arc<dyn MonitoringClient>) -> Result<()> {
    let mut slot = CLIENT.write();
    if slot.is_some() {
        return Err(CoreError::AlreadyRegistered(
            "monitoring client".to_string(),
        ));
    }
    *slot = Some(client);
    Ok(())
}

/// Remove the process-wide monitoring client, restoring the no-op default.
pub fn clear_monitoring_client() {
    *CLIENT.write() = None;
}

/// The process-wide monitoring client, or the no-op default.
pub fn get_monitoring_client() -> Arc<dyn MonitoringClient> {
    CLIENT.read().clone().unwrap_or_else(|| NOOP_CLIENT.clone())
}

/// Derive the monitoring view of the keyset behind a primitive set.
pub fn keyset_info_from_primitive_set<P>(set: &PrimitiveSet<P>) -> Result<MonitoringKeysetInfo> {
    let primary = set
        .primary()
        .ok_or_else(|| CoreError::Internal("primitive set has no primary".to_string()))?;
    let mut entries: Vec<MonitoringKeyInfo> = set
        .entries()
        .map(|entry| MonitoringKeyInfo {
            key_id: entry.key_id(),
            status: entry.status(),
            type_url: entry.type_url().to_string(),
            prefix_type: entry.prefix_type(),
        })
        .collect();
    entries.sort_by_key(|entry| entry.key_id);
    Ok(MonitoringKeysetInfo {
        primary_key_id: primary.key_id(),
        entries,
        annotations: set.annotations().clone(),
    })
}
