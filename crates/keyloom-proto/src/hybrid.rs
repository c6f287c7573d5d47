//! Hybrid-encryption key-format messages: HPKE and ECIES-AEAD-HKDF.

use crate::common::{EcPointFormat, EllipticCurveKind, HashKind};
use crate::keyset::KeyTemplate;
use serde::{Deserialize, Serialize};

/// HPKE key-encapsulation mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HpkeKem {
    /// DHKEM over NIST P-256 with HKDF-SHA256.
    DhkemP256HkdfSha256,
    /// DHKEM over X25519 with HKDF-SHA256.
    DhkemX25519HkdfSha256,
}

/// HPKE key-derivation function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HpkeKdf {
    /// HKDF-SHA256.
    HkdfSha256,
}

/// HPKE payload AEAD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HpkeAead {
    /// AES-128-GCM.
    Aes128Gcm,
    /// AES-256-GCM.
    Aes256Gcm,
    /// ChaCha20-Poly1305.
    ChaCha20Poly1305,
}

/// The (KEM, KDF, AEAD) triple describing an HPKE suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpkeParams {
    /// Key-encapsulation mechanism.
    pub kem: HpkeKem,
    /// Key-derivation function.
    pub kdf: HpkeKdf,
    /// Payload AEAD.
    pub aead: HpkeAead,
}

/// Recipe for a fresh HPKE key pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HpkeKeyFormat {
    /// Suite parameters for the minted key pair.
    pub params: HpkeParams,
}

/// KEM half of the ECIES-AEAD-HKDF parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EciesHkdfKemParams {
    /// Curve of the ephemeral ECDH key.
    pub curve_type: EllipticCurveKind,
    /// Hash driving the HKDF step.
    pub hkdf_hash_type: HashKind,
    /// HKDF salt; empty means no salt.
    pub hkdf_salt: Vec<u8>,
}

/// DEM half of the ECIES-AEAD-HKDF parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EciesAeadDemParams {
    /// Template of the data-encapsulation AEAD key.
    pub aead_dem: KeyTemplate,
}

/// Full ECIES-AEAD-HKDF parameter set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EciesAeadHkdfParams {
    /// Key-encapsulation parameters.
    pub kem_params: EciesHkdfKemParams,
    /// Data-encapsulation parameters.
    pub dem_params: EciesAeadDemParams,
    /// Wire encoding of the ephemeral public point.
    pub ec_point_format: EcPointFormat,
}

/// Recipe for a fresh ECIES-AEAD-HKDF key pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EciesAeadHkdfKeyFormat {
    /// Scheme parameters for the minted key pair.
    pub params: EciesAeadHkdfParams,
}
