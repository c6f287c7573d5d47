//! Digital-signature key templates: ECDSA, Ed25519 and RSA-SSA.

use keyloom_proto::signature::{
    EcdsaKeyFormat, EcdsaParams, EcdsaSignatureEncoding, RsaSsaPkcs1KeyFormat, RsaSsaPkcs1Params,
    RsaSsaPssKeyFormat, RsaSsaPssParams,
};
use keyloom_proto::{codec, EllipticCurveKind, HashKind, KeyTemplate, OutputPrefixType};

/// Type URL of ECDSA private keys.
pub const ECDSA_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.EcdsaPrivateKey";

/// Type URL of Ed25519 private keys.
pub const ED25519_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.Ed25519PrivateKey";

/// Type URL of RSA-SSA-PKCS1 private keys.
pub const RSA_SSA_PKCS1_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.RsaSsaPkcs1PrivateKey";

/// Type URL of RSA-SSA-PSS private keys.
pub const RSA_SSA_PSS_PRIVATE_KEY_TYPE_URL: &str =
    "type.googleapis.com/google.crypto.tink.RsaSsaPssPrivateKey";

// 65537, the Fermat prime F4.
const F4: [u8; 3] = [0x01, 0x00, 0x01];

/// ECDSA over P-256 with SHA-256 and DER signatures, TINK prefix.
pub fn ecdsa_p256_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashKind::Sha256,
        EllipticCurveKind::NistP256,
        EcdsaSignatureEncoding::Der,
        OutputPrefixType::Tink,
    )
}

/// ECDSA over P-256 with SHA-256 and fixed-width IEEE P1363 signatures,
/// no prefix.
pub fn ecdsa_p256_raw_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashKind::Sha256,
        EllipticCurveKind::NistP256,
        EcdsaSignatureEncoding::IeeeP1363,
        OutputPrefixType::Raw,
    )
}

/// ECDSA over P-384 with SHA-384 and DER signatures, TINK prefix.
pub fn ecdsa_p384_sha384_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashKind::Sha384,
        EllipticCurveKind::NistP384,
        EcdsaSignatureEncoding::Der,
        OutputPrefixType::Tink,
    )
}

/// ECDSA over P-384 with SHA-512 and DER signatures, TINK prefix.
pub fn ecdsa_p384_sha512_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashKind::Sha512,
        EllipticCurveKind::NistP384,
        EcdsaSignatureEncoding::Der,
        OutputPrefixType::Tink,
    )
}

/// ECDSA over P-521 with SHA-512 and DER signatures, TINK prefix.
pub fn ecdsa_p521_key_template() -> KeyTemplate {
    create_ecdsa_key_template(
        HashKind::Sha512,
        EllipticCurveKind::NistP521,
        EcdsaSignatureEncoding::Der,
        OutputPrefixType::Tink,
    )
}

fn create_ecdsa_key_template(
    hash_type: HashKind,
    curve: EllipticCurveKind,
    encoding: EcdsaSignatureEncoding,
    output_prefix_type: OutputPrefixType,
) -> KeyTemplate {
    let format = EcdsaKeyFormat {
        params: EcdsaParams {
            hash_type,
            curve,
            encoding,
        },
        version: 0,
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: ECDSA_PRIVATE_KEY_TYPE_URL.to_string(),
        value,
        output_prefix_type,
    }
}

/// Ed25519, TINK prefix. Ed25519 keys take no parameters, so the template
/// carries an empty format.
pub fn ed25519_key_template() -> KeyTemplate {
    KeyTemplate {
        type_url: ED25519_PRIVATE_KEY_TYPE_URL.to_string(),
        value: Vec::new(),
        output_prefix_type: OutputPrefixType::Tink,
    }
}

/// Ed25519 without a signature prefix.
pub fn ed25519_raw_key_template() -> KeyTemplate {
    KeyTemplate {
        type_url: ED25519_PRIVATE_KEY_TYPE_URL.to_string(),
        value: Vec::new(),
        output_prefix_type: OutputPrefixType::Raw,
    }
}

/// RSA-SSA-PKCS1 with a 3072-bit modulus and SHA-256, TINK prefix.
pub fn rsa_ssa_pkcs1_3072_sha256_key_template() -> KeyTemplate {
    create_rsa_ssa_pkcs1_template(HashKind::Sha256, 3072, OutputPrefixType::Tink)
}

/// RSA-SSA-PKCS1 with a 3072-bit modulus and SHA-256, no prefix.
pub fn rsa_ssa_pkcs1_3072_sha256_raw_key_template() -> KeyTemplate {
    create_rsa_ssa_pkcs1_template(HashKind::Sha256, 3072, OutputPrefixType::Raw)
}

/// RSA-SSA-PKCS1 with a 4096-bit modulus and SHA-512, TINK prefix.
pub fn rsa_ssa_pkcs1_4096_sha512_key_template() -> KeyTemplate {
    create_rsa_ssa_pkcs1_template(HashKind::Sha512, 4096, OutputPrefixType::Tink)
}

/// RSA-SSA-PKCS1 with a 4096-bit modulus and SHA-512, no prefix.
pub fn rsa_ssa_pkcs1_4096_sha512_raw_key_template() -> KeyTemplate {
    create_rsa_ssa_pkcs1_template(HashKind::Sha512, 4096, OutputPrefixType::Raw)
}

fn create_rsa_ssa_pkcs1_template(
    hash_type: HashKind,
    modulus_size_in_bits: u32,
    output_prefix_type: OutputPrefixType,
) -> KeyTemplate {
    let format = RsaSsaPkcs1KeyFormat {
        params: RsaSsaPkcs1Params { hash_type },
        modulus_size_in_bits,
        public_exponent: F4.to_vec(),
        version: 0,
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: RSA_SSA_PKCS1_PRIVATE_KEY_TYPE_URL.to_string(),
        value,
        output_prefix_type,
    }
}

/// RSA-SSA-PSS with a 3072-bit modulus, SHA-256 and a 32-byte salt, TINK
/// prefix.
pub fn rsa_ssa_pss_3072_sha256_32_key_template() -> KeyTemplate {
    create_rsa_ssa_pss_template(HashKind::Sha256, 32, 3072, OutputPrefixType::Tink)
}

/// RSA-SSA-PSS with a 3072-bit modulus, SHA-256 and a 32-byte salt, no
/// prefix.
pub fn rsa_ssa_pss_3072_sha256_32_raw_key_template() -> KeyTemplate {
    create_rsa_ssa_pss_template(HashKind::Sha256, 32, 3072, OutputPrefixType::Raw)
}

/// RSA-SSA-PSS with a 4096-bit modulus, SHA-512 and a 64-byte salt, TINK
/// prefix.
pub fn rsa_ssa_pss_4096_sha512_64_key_template() -> KeyTemplate {
    create_rsa_ssa_pss_template(HashKind::Sha512, 64, 4096, OutputPrefixType::Tink)
}

/// RSA-SSA-PSS with a 4096-bit modulus, SHA-512 and a 64-byte salt, no
/// prefix.
pub fn rsa_ssa_pss_4096_sha512_64_raw_key_template() -> KeyTemplate {
    create_rsa_ssa_pss_template(HashKind::Sha512, 64, 4096, OutputPrefixType::Raw)
}

fn create_rsa_ssa_pss_template(
    hash: HashKind,
    salt_length: i32,
    modulus_size_in_bits: u32,
    output_prefix_type: OutputPrefixType,
) -> KeyTemplate {
    let format = RsaSsaPssKeyFormat {
        params: RsaSsaPssParams {
            sig_hash: hash,
            mgf1_hash: hash,
            salt_length,
        },
        modulus_size_in_bits,
        public_exponent: F4.to_vec(),
        version: 0,
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: RSA_SSA_PSS_PRIVATE_KEY_TYPE_URL.to_string(),
        value,
        output_prefix_type,
    }
}
