//! Hybrid-encryption key templates: HPKE suites and ECIES-AEAD-HKDF.

use keyloom_proto::hybrid::{
    EciesAeadDemParams, EciesAeadHkdfKeyFormat, EciesAeadHkdfParams, EciesHkdfKemParams, HpkeAead,
    HpkeKdf, HpkeKem, HpkeKeyFormat, HpkeParams,
};
use keyloom_proto::xchacha20poly1305::XChaCha20Poly1305KeyFormat;
use keyloom_proto::{
    codec, EcPointFormat, EllipticCurveKind, HashKind, KeyTemplate, OutputPrefixType,
};

/// Type URL of HPKE private keys.
pub const HPKE_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.HpkePrivateKey";

/// Type URL of ECIES-AEAD-HKDF private keys.
pub const ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.EciesAeadHkdfPrivateKey";

/// HPKE with DHKEM-P256, HKDF-SHA256 and AES-128-GCM, TINK prefix.
pub fn hpke_p256_hkdf_sha256_aes128_gcm_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemP256HkdfSha256,
        HpkeAead::Aes128Gcm,
        OutputPrefixType::Tink,
    )
}

/// HPKE with DHKEM-P256, HKDF-SHA256 and AES-128-GCM, no prefix.
pub fn hpke_p256_hkdf_sha256_aes128_gcm_raw_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemP256HkdfSha256,
        HpkeAead::Aes128Gcm,
        OutputPrefixType::Raw,
    )
}

/// HPKE with DHKEM-P256, HKDF-SHA256 and AES-256-GCM, TINK prefix.
pub fn hpke_p256_hkdf_sha256_aes256_gcm_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemP256HkdfSha256,
        HpkeAead::Aes256Gcm,
        OutputPrefixType::Tink,
    )
}

/// HPKE with DHKEM-P256, HKDF-SHA256 and AES-256-GCM, no prefix.
pub fn hpke_p256_hkdf_sha256_aes256_gcm_raw_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemP256HkdfSha256,
        HpkeAead::Aes256Gcm,
        OutputPrefixType::Raw,
    )
}

/// HPKE with DHKEM-X25519, HKDF-SHA256 and AES-128-GCM, TINK prefix.
pub fn hpke_x25519_hkdf_sha256_aes128_gcm_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemX25519HkdfSha256,
        HpkeAead::Aes128Gcm,
        OutputPrefixType::Tink,
    )
}

/// HPKE with DHKEM-X25519, HKDF-SHA256 and AES-128-GCM, no prefix.
pub fn hpke_x25519_hkdf_sha256_aes128_gcm_raw_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemX25519HkdfSha256,
        HpkeAead::Aes128Gcm,
        OutputPrefixType::Raw,
    )
}

/// HPKE with DHKEM-X25519, HKDF-SHA256 and AES-256-GCM, TINK prefix.
pub fn hpke_x25519_hkdf_sha256_aes256_gcm_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemX25519HkdfSha256,
        HpkeAead::Aes256Gcm,
        OutputPrefixType::Tink,
    )
}

/// HPKE with DHKEM-X25519, HKDF-SHA256 and AES-256-GCM, no prefix.
pub fn hpke_x25519_hkdf_sha256_aes256_gcm_raw_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemX25519HkdfSha256,
        HpkeAead::Aes256Gcm,
        OutputPrefixType::Raw,
    )
}

/// HPKE with DHKEM-X25519, HKDF-SHA256 and ChaCha20-Poly1305, TINK prefix.
pub fn hpke_x25519_hkdf_sha256_chacha20_poly1305_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemX25519HkdfSha256,
        HpkeAead::ChaCha20Poly1305,
        OutputPrefixType::Tink,
    )
}

/// HPKE with DHKEM-X25519, HKDF-SHA256 and ChaCha20-Poly1305, no prefix.
pub fn hpke_x25519_hkdf_sha256_chacha20_poly1305_raw_key_template() -> KeyTemplate {
    create_hpke_key_template(
        HpkeKem::DhkemX25519HkdfSha256,
        HpkeAead::ChaCha20Poly1305,
        OutputPrefixType::Raw,
    )
}

fn create_hpke_key_template(
    kem: HpkeKem,
    aead: HpkeAead,
    output_prefix_type: OutputPrefixType,
) -> KeyTemplate {
    let format = HpkeKeyFormat {
        params: HpkeParams {
            kem,
            kdf: HpkeKdf::HkdfSha256,
            aead,
        },
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: HPKE_PRIVATE_KEY_TYPE_URL.to_string(),
        value,
        output_prefix_type,
    }
}

/// ECIES-AEAD-HKDF over NIST P-256 with an HKDF-SHA256 KEM step, an
/// XChaCha20-Poly1305 DEM and an empty salt, TINK prefix.
pub fn ecies_p256_hkdf_sha256_xchacha20_poly1305_key_template() -> KeyTemplate {
    let dem = KeyTemplate {
        type_url: "type.googleapis.com/google.crypto.tink.XChaCha20Poly1305Key".to_string(),
        value: codec::encode(&XChaCha20Poly1305KeyFormat { version: 0 })
            .expect("failed to encode key format"),
        output_prefix_type: OutputPrefixType::Tink,
    };
    create_ecies_aead_hkdf_key_template(
        EllipticCurveKind::NistP256,
        HashKind::Sha256,
        EcPointFormat::Uncompressed,
        dem,
        Vec::new(),
    )
}

fn create_ecies_aead_hkdf_key_template(
    curve_type: EllipticCurveKind,
    hkdf_hash_type: HashKind,
    ec_point_format: EcPointFormat,
    aead_dem: KeyTemplate,
    hkdf_salt: Vec<u8>,
) -> KeyTemplate {
    let format = EciesAeadHkdfKeyFormat {
        params: EciesAeadHkdfParams {
            kem_params: EciesHkdfKemParams {
                curve_type,
                hkdf_hash_type,
                hkdf_salt,
            },
            dem_params: EciesAeadDemParams { aead_dem },
            ec_point_format,
        },
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: ECIES_AEAD_HKDF_PRIVATE_KEY_TYPE_URL.to_string(),
        value,
        output_prefix_type: OutputPrefixType::Tink,
    }
}
