//! # keyloom-templates
//!
//! Pre-built key templates for the deterministic-AEAD, hybrid-encryption
//! and digital-signature families. A template fixes an algorithm, its
//! parameters and the output prefix type; the registry's key managers mint
//! fresh keys from it.
//!
//! Templates are constants: an encoding failure while building one is a
//! programming error and aborts the process.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod daead;
pub mod hybrid;
pub mod signature;
