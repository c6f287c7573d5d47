//! # keyloom-proto
//!
//! Wire-level data model for keyloom: key material containers, keysets,
//! key templates and the per-algorithm key/format messages, together with
//! the canonical binary codec used to serialize them.
//!
//! Everything above this crate treats serialized keys and formats as opaque
//! byte strings tagged by a stable type URL; this crate is the only place
//! that knows their shape.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod common;
pub mod daead;
pub mod errors;
pub mod hmac;
pub mod hybrid;
pub mod keyset;
pub mod signature;
pub mod xchacha20poly1305;

pub use codec::{decode, encode};
pub use common::{EcPointFormat, EllipticCurveKind, HashKind};
pub use errors::{ProtoError, Result};
pub use hmac::{HmacKey, HmacKeyFormat, HmacParams};
pub use keyset::{
    Key, KeyData, KeyInfo, KeyMaterialType, KeysetInfo, KeyStatus, KeyTemplate, Keyset,
    OutputPrefixType,
};
pub use xchacha20poly1305::{XChaCha20Poly1305Key, XChaCha20Poly1305KeyFormat};
