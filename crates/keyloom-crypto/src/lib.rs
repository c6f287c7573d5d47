//! # keyloom-crypto
//!
//! Cryptographic capability traits and the subtle primitive implementations
//! keyloom's core consumes: HMAC over the SHA family and the
//! XChaCha20-Poly1305 AEAD, plus the process random source.
//!
//! ## Security Properties
//!
//! - Tag comparison is constant-time
//! - Key material is zeroized on drop and never appears in error messages
//! - No unsafe code

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hmac;
pub mod random;
pub mod traits;
pub mod xchacha20poly1305;

pub use errors::{CryptoError, Result};
pub use hmac::{validate_hmac_params, Hmac};
pub use traits::{
    Aead, DeterministicAead, HybridDecrypt, HybridEncrypt, Mac, Signer, Verifier,
};
pub use xchacha20poly1305::XChaCha20Poly1305;
