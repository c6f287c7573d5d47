//! # keyloom-core
//!
//! The keyset machinery of keyloom: the process-wide key-manager registry,
//! the output-prefix protocol, keyset handles and mutation, primitive sets,
//! and the monitoring seam used by wrapped primitives.
//!
//! Algorithm families register their key managers here at initialization;
//! after that the registry is effectively read-only and every keyset
//! operation flows template -> registry -> key manager -> keyset -> handle
//! -> primitive set -> wrapped primitive.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod cryptofmt;
pub mod errors;
pub mod insecure;
pub mod key_manager;
pub mod keyset;
pub mod monitoring;
pub mod primitive_set;
pub mod registry;

#[cfg(test)]
mod testutil;

pub use errors::{CoreError, Result};
pub use key_manager::{KeyManager, Primitive};
pub use keyset::{validate, validate_key_version, Handle, Manager};
pub use monitoring::{
    keyset_info_from_primitive_set, MonitoringClient, MonitoringContext, MonitoringKeyInfo,
    MonitoringKeysetInfo, MonitoringLogger, NoopLogger,
};
pub use primitive_set::{Entry, PrimitiveSet};
