//! # keyloom-aead
//!
//! The AEAD algorithm family: the XChaCha20-Poly1305 key manager, its key
//! templates, and the wrapped AEAD primitive that multiplexes a keyset
//! handle according to the output-prefix protocol.
//!
//! Call [`init`] once during bootstrap to register the family's key
//! managers.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod factory;
mod key_manager;
mod templates;

pub use factory::new_aead;
pub use key_manager::{
    XChaCha20Poly1305KeyManager, XCHACHA20_POLY1305_KEY_VERSION, XCHACHA20_POLY1305_TYPE_URL,
};
pub use templates::{xchacha20_poly1305_key_template, xchacha20_poly1305_raw_key_template};

use keyloom_core::{registry, Result};
use once_cell::sync::Lazy;
use std::sync::Arc;

static XCHACHA20_POLY1305_KEY_MANAGER: Lazy<Arc<XChaCha20Poly1305KeyManager>> =
    Lazy::new(|| Arc::new(XChaCha20Poly1305KeyManager));

/// Register the AEAD family's key managers with the global registry.
///
/// Idempotent; call from the process bootstrap before using AEAD keysets.
pub fn init() -> Result<()> {
    registry::register_key_manager(XCHACHA20_POLY1305_KEY_MANAGER.clone())
}
