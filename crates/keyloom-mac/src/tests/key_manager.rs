use super::*;
use keyloom_core::key_manager::{KeyManager, Primitive};
use keyloom_core::CoreError;
use keyloom_crypto::{Hmac, Mac};
use keyloom_proto::HmacKeyFormat;
use std::io::Read;

fn serialized_format(hash: HashKind, key_size: u32, tag_size: u32) -> Vec<u8> {
    codec::encode(&HmacKeyFormat {
        params: HmacParams { hash, tag_size },
        key_size,
        version: 0,
    })
    .unwrap()
}

fn as_mac(primitive: Primitive) -> std::sync::Arc<dyn Mac> {
    match primitive {
        Primitive::Mac(mac) => mac,
        other => panic!("expected a MAC, got {}", other.kind()),
    }
}

#[test]
fn primitive_matches_subtle_hmac() {
    let key_value = vec![0x42u8; 32];
    let serialized = serialized_hmac_key(HashKind::Sha256, 16, key_value.clone());

    let mac = as_mac(HmacKeyManager.primitive(&serialized).unwrap());
    let subtle = Hmac::new("SHA256", &key_value, 16).unwrap();

    let tag = mac.compute_mac(b"data").unwrap();
    assert_eq!(tag, subtle.compute_mac(b"data").unwrap());
    assert!(mac.verify_mac(&tag, b"data").is_ok());
}

#[test]
fn primitive_rejects_empty_and_garbage_input() {
    assert!(matches!(
        HmacKeyManager.primitive(&[]),
        Err(CoreError::InvalidKey(_))
    ));
    assert!(matches!(
        HmacKeyManager.primitive(&[0xde, 0xad]),
        Err(CoreError::InvalidKey(_))
    ));
}

#[test]
fn primitive_rejects_future_key_version() {
    let serialized = codec::encode(&HmacKey {
        version: 1,
        params: HmacParams {
            hash: HashKind::Sha256,
            tag_size: 16,
        },
        key_value: vec![0x42; 32],
    })
    .unwrap();
    assert!(matches!(
        HmacKeyManager.primitive(&serialized),
        Err(CoreError::InvalidKey(_))
    ));
}

#[test]
fn primitive_rejects_short_keys_and_oversized_tags() {
    let short = serialized_hmac_key(HashKind::Sha256, 16, vec![0x42; 15]);
    assert!(HmacKeyManager.primitive(&short).is_err());

    let oversized = serialized_hmac_key(HashKind::Sha256, 33, vec![0x42; 32]);
    assert!(HmacKeyManager.primitive(&oversized).is_err());
}

#[test]
fn new_key_respects_the_format() {
    let format = serialized_format(HashKind::Sha256, 32, 16);
    let serialized = HmacKeyManager.new_key(&format).unwrap();
    let key: HmacKey = codec::decode(&serialized).unwrap();

    assert_eq!(key.version, HMAC_KEY_VERSION);
    assert_eq!(key.params.hash, HashKind::Sha256);
    assert_eq!(key.params.tag_size, 16);
    assert_eq!(key.key_value.len(), 32);
}

#[test]
fn new_key_draws_fresh_randomness() {
    let format = serialized_format(HashKind::Sha256, 32, 16);
    let first: HmacKey = codec::decode(&HmacKeyManager.new_key(&format).unwrap()).unwrap();
    let second: HmacKey = codec::decode(&HmacKeyManager.new_key(&format).unwrap()).unwrap();
    assert_ne!(first.key_value, second.key_value);
}

#[test]
fn new_key_rejects_bad_formats() {
    assert!(matches!(
        HmacKeyManager.new_key(&[]),
        Err(CoreError::InvalidKeyFormat(_))
    ));
    // Tag below the floor.
    let format = serialized_format(HashKind::Sha256, 32, 9);
    assert!(HmacKeyManager.new_key(&format).is_err());
    // Key below the minimum.
    let format = serialized_format(HashKind::Sha256, 8, 16);
    assert!(HmacKeyManager.new_key(&format).is_err());
}

#[test]
fn new_key_data_is_tagged_with_the_type_url() {
    let format = serialized_format(HashKind::Sha512, 64, 32);
    let key_data = HmacKeyManager.new_key_data(&format).unwrap();
    assert_eq!(key_data.type_url, HMAC_TYPE_URL);
    assert_eq!(key_data.key_material_type, KeyMaterialType::Symmetric);
    let key: HmacKey = codec::decode(&key_data.value).unwrap();
    assert_eq!(key.key_value.len(), 64);
}

#[test]
fn derive_key_is_deterministic() {
    let format = serialized_format(HashKind::Sha256, 32, 16);
    let stream: Vec<u8> = (0u8..64).collect();

    let mut first_reader = stream.as_slice();
    let first = HmacKeyManager
        .derive_key(&format, &mut first_reader)
        .unwrap();
    let mut second_reader = stream.as_slice();
    let second = HmacKeyManager
        .derive_key(&format, &mut second_reader)
        .unwrap();
    assert_eq!(first, second);

    let key: HmacKey = codec::decode(&first).unwrap();
    assert_eq!(key.key_value, &stream[..32]);
}

#[test]
fn derive_key_reads_exactly_the_key_size() {
    let format = serialized_format(HashKind::Sha256, 32, 16);
    let stream = vec![7u8; 40];
    let mut reader = stream.as_slice();
    HmacKeyManager.derive_key(&format, &mut reader).unwrap();

    let mut rest = Vec::new();
    reader.read_to_end(&mut rest).unwrap();
    assert_eq!(rest.len(), 8);
}

#[test]
fn derive_key_fails_on_short_entropy() {
    let format = serialized_format(HashKind::Sha256, 32, 16);
    let mut empty = std::io::empty();
    assert!(matches!(
        HmacKeyManager.derive_key(&format, &mut empty),
        Err(CoreError::ShortEntropy)
    ));

    let short = vec![7u8; 31];
    let mut reader = short.as_slice();
    assert!(matches!(
        HmacKeyManager.derive_key(&format, &mut reader),
        Err(CoreError::ShortEntropy)
    ));
}

#[test]
fn derive_key_rejects_future_format_versions() {
    let format = codec::encode(&HmacKeyFormat {
        params: HmacParams {
            hash: HashKind::Sha256,
            tag_size: 16,
        },
        key_size: 32,
        version: 1,
    })
    .unwrap();
    let stream = vec![7u8; 64];
    let mut reader = stream.as_slice();
    assert!(matches!(
        HmacKeyManager.derive_key(&format, &mut reader),
        Err(CoreError::InvalidKeyFormat(_))
    ));
}

#[test]
fn manager_identity() {
    assert_eq!(HmacKeyManager.type_url(), HMAC_TYPE_URL);
    assert!(HmacKeyManager.does_support(HMAC_TYPE_URL));
    assert!(!HmacKeyManager.does_support("type.googleapis.com/google.crypto.tink.AesSivKey"));
    assert_eq!(
        HmacKeyManager.key_material_type(),
        KeyMaterialType::Symmetric
    );
}
