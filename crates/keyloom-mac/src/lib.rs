//! # keyloom-mac
//!
//! The MAC algorithm family: the HMAC key manager, pre-built HMAC key
//! templates, and the wrapped MAC primitive that multiplexes a keyset
//! handle according to the output-prefix protocol.
//!
//! Call [`init`] once during bootstrap to register the family's key
//! managers, then mint a handle from a template and wrap it:
//!
//! ```no_run
//! use keyloom_crypto::Mac as _;
//!
//! keyloom_mac::init().unwrap();
//! let handle =
//!     keyloom_core::Handle::new(&keyloom_mac::hmac_sha256_tag128_key_template()).unwrap();
//! let mac = keyloom_mac::new_mac(&handle).unwrap();
//! let tag = mac.compute_mac(b"data").unwrap();
//! assert!(mac.verify_mac(&tag, b"data").is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

mod factory;
mod key_manager;
mod templates;


pub use factory::new_mac;
pub use key_manager::{HmacKeyManager, HMAC_KEY_VERSION, HMAC_TYPE_URL};
pub use templates::{
    hmac_sha256_tag128_key_template, hmac_sha256_tag256_key_template,
    hmac_sha512_tag256_key_template, hmac_sha512_tag512_key_template,
};

use keyloom_core::{registry, Result};
use once_cell::sync::Lazy;
use std::sync::Arc;

static HMAC_KEY_MANAGER: Lazy<Arc<HmacKeyManager>> = Lazy::new(|| Arc::new(HmacKeyManager));

/// Register the MAC family's key managers with the global registry.
///
/// Idempotent; call from the process bootstrap before using MAC keysets.
pub fn init() -> Result<()> {
    registry::register_key_manager(HMAC_KEY_MANAGER.clone())
}
