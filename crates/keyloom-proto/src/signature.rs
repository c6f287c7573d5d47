//! Digital-signature key-format messages: ECDSA and RSA-SSA.

use crate::common::{EllipticCurveKind, HashKind};
use serde::{Deserialize, Serialize};

/// Wire encoding of an ECDSA signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EcdsaSignatureEncoding {
    /// ASN.1 DER `SEQUENCE { r, s }`.
    Der,
    /// Fixed-width `r || s` per IEEE P1363.
    IeeeP1363,
}

/// ECDSA scheme parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaParams {
    /// Message digest.
    pub hash_type: HashKind,
    /// Signing curve.
    pub curve: EllipticCurveKind,
    /// Signature encoding.
    pub encoding: EcdsaSignatureEncoding,
}

/// Recipe for a fresh ECDSA key pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaKeyFormat {
    /// Scheme parameters for the minted key pair.
    pub params: EcdsaParams,
    /// Format version. Always 0; higher values are rejected.
    pub version: u32,
}

/// RSA-SSA-PKCS1 scheme parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaSsaPkcs1Params {
    /// Message digest.
    pub hash_type: HashKind,
}

/// Recipe for a fresh RSA-SSA-PKCS1 key pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaSsaPkcs1KeyFormat {
    /// Scheme parameters for the minted key pair.
    pub params: RsaSsaPkcs1Params,
    /// Modulus size in bits.
    pub modulus_size_in_bits: u32,
    /// Public exponent, big-endian. Typically 65537.
    pub public_exponent: Vec<u8>,
    /// Format version. Always 0; higher values are rejected.
    pub version: u32,
}

/// RSA-SSA-PSS scheme parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaSsaPssParams {
    /// Digest applied to the message.
    pub sig_hash: HashKind,
    /// Digest driving MGF1. Matches `sig_hash` in practice.
    pub mgf1_hash: HashKind,
    /// PSS salt length in bytes.
    pub salt_length: i32,
}

/// Recipe for a fresh RSA-SSA-PSS key pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaSsaPssKeyFormat {
    /// Scheme parameters for the minted key pair.
    pub params: RsaSsaPssParams,
    /// Modulus size in bits.
    pub modulus_size_in_bits: u32,
    /// Public exponent, big-endian. Typically 65537.
    pub public_exponent: Vec<u8>,
    /// Format version. Always 0; higher values are rejected.
    pub version: u32,
}
