//! Pre-built HMAC key templates.
//!
//! Templates are constants; an encoding failure here is a programming
//! error and aborts the process.

use crate::key_manager::{HMAC_KEY_VERSION, HMAC_TYPE_URL};
use keyloom_proto::{codec, HashKind, HmacKeyFormat, HmacParams, KeyTemplate, OutputPrefixType};

/// HMAC-SHA256 with a 32-byte key and 16-byte tags, TINK prefix.
pub fn hmac_sha256_tag128_key_template() -> KeyTemplate {
    create_hmac_key_template(32, 16, HashKind::Sha256)
}

/// HMAC-SHA256 with a 32-byte key and 32-byte tags, TINK prefix.
pub fn hmac_sha256_tag256_key_template() -> KeyTemplate {
    create_hmac_key_template(32, 32, HashKind::Sha256)
}

/// HMAC-SHA512 with a 64-byte key and 32-byte tags, TINK prefix.
pub fn hmac_sha512_tag256_key_template() -> KeyTemplate {
    create_hmac_key_template(64, 32, HashKind::Sha512)
}

/// HMAC-SHA512 with a 64-byte key and 64-byte tags, TINK prefix.
pub fn hmac_sha512_tag512_key_template() -> KeyTemplate {
    create_hmac_key_template(64, 64, HashKind::Sha512)
}

fn create_hmac_key_template(key_size: u32, tag_size: u32, hash: HashKind) -> KeyTemplate {
    let format = HmacKeyFormat {
        params: HmacParams { hash, tag_size },
        key_size,
        version: HMAC_KEY_VERSION,
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: HMAC_TYPE_URL.to_string(),
        value,
        output_prefix_type: OutputPrefixType::Tink,
    }
}
