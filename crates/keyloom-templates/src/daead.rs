//! Deterministic-AEAD key templates.

use keyloom_proto::daead::AesSivKeyFormat;
use keyloom_proto::{codec, KeyTemplate, OutputPrefixType};

/// Type URL of AES-SIV keys.
pub const AES_SIV_TYPE_URL: &str = "type.googleapis.com/google.crypto.tink.AesSivKey";

/// AES-SIV with a 64-byte key, TINK prefix.
pub fn aes_siv_key_template() -> KeyTemplate {
    let format = AesSivKeyFormat {
        key_size: 64,
        version: 0,
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: AES_SIV_TYPE_URL.to_string(),
        value,
        output_prefix_type: OutputPrefixType::Tink,
    }
}
