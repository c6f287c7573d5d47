//! Pre-built XChaCha20-Poly1305 key templates.

use crate::key_manager::{XCHACHA20_POLY1305_KEY_VERSION, XCHACHA20_POLY1305_TYPE_URL};
use keyloom_proto::{codec, KeyTemplate, OutputPrefixType, XChaCha20Poly1305KeyFormat};

/// XChaCha20-Poly1305 with the 5-byte TINK prefix on ciphertexts.
pub fn xchacha20_poly1305_key_template() -> KeyTemplate {
    create_xchacha20_poly1305_key_template(OutputPrefixType::Tink)
}

/// XChaCha20-Poly1305 without a ciphertext prefix.
pub fn xchacha20_poly1305_raw_key_template() -> KeyTemplate {
    create_xchacha20_poly1305_key_template(OutputPrefixType::Raw)
}

fn create_xchacha20_poly1305_key_template(output_prefix_type: OutputPrefixType) -> KeyTemplate {
    let format = XChaCha20Poly1305KeyFormat {
        version: XCHACHA20_POLY1305_KEY_VERSION,
    };
    let value = codec::encode(&format).expect("failed to encode key format");
    KeyTemplate {
        type_url: XCHACHA20_POLY1305_TYPE_URL.to_string(),
        value,
        output_prefix_type,
    }
}
