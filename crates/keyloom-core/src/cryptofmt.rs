//! Output-prefix computation.
//!
//! The prefix is wire-compatible across language implementations and must
//! not change:
//!
//! ```text
//! TINK:     0x01 || big-endian uint32 key id
//! CRUNCHY:  0x00 || big-endian uint32 key id
//! LEGACY:   0x00 || big-endian uint32 key id
//! RAW:      (empty)
//! ```

use crate::errors::{CoreError, Result};
use keyloom_proto::{Key, OutputPrefixType};

/// Prefix size in bytes for all non-RAW prefix types.
pub const NON_RAW_PREFIX_SIZE: usize = 5;

/// Prefix size in bytes for RAW keys.
pub const RAW_PREFIX_SIZE: usize = 0;

/// Leading byte of a TINK prefix.
pub const TINK_START_BYTE: u8 = 0x01;

/// Leading byte of a LEGACY or CRUNCHY prefix.
pub const LEGACY_START_BYTE: u8 = 0x00;

/// Compute the output prefix for a key.
pub fn output_prefix(key: &Key) -> Result<Vec<u8>> {
    match key.output_prefix_type {
        OutputPrefixType::Tink => Ok(create_prefix(TINK_START_BYTE, key.key_id)),
        OutputPrefixType::Legacy | OutputPrefixType::Crunchy => {
            Ok(create_prefix(LEGACY_START_BYTE, key.key_id))
        }
        OutputPrefixType::Raw => Ok(Vec::new()),
        OutputPrefixType::UnknownPrefix => Err(CoreError::InvalidKey(
            "unknown output prefix type".to_string(),
        )),
    }
}

fn create_prefix(start_byte: u8, key_id: u32) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(NON_RAW_PREFIX_SIZE);
    prefix.push(start_byte);
    prefix.extend_from_slice(&key_id.to_be_bytes());
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyloom_proto::{KeyData, KeyMaterialType, KeyStatus};

    fn key_with(prefix_type: OutputPrefixType, key_id: u32) -> Key {
        Key {
            key_data: KeyData {
                type_url: "type.googleapis.com/google.crypto.tink.HmacKey".to_string(),
                value: Vec::new(),
                key_material_type: KeyMaterialType::Symmetric,
            },
            status: KeyStatus::Enabled,
            key_id,
            output_prefix_type: prefix_type,
        }
    }

    #[test]
    fn tink_prefix_is_bit_exact() {
        let prefix = output_prefix(&key_with(OutputPrefixType::Tink, 0x0102_0304)).unwrap();
        assert_eq!(prefix, [0x01, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn legacy_and_crunchy_share_the_zero_start_byte() {
        let legacy = output_prefix(&key_with(OutputPrefixType::Legacy, 0x0102_0304)).unwrap();
        let crunchy = output_prefix(&key_with(OutputPrefixType::Crunchy, 0x0102_0304)).unwrap();
        assert_eq!(legacy, [0x00, 0x01, 0x02, 0x03, 0x04]);
        assert_eq!(legacy, crunchy);
    }

    #[test]
    fn raw_prefix_is_empty() {
        let prefix = output_prefix(&key_with(OutputPrefixType::Raw, 0x0102_0304)).unwrap();
        assert!(prefix.is_empty());
    }

    #[test]
    fn key_id_is_big_endian() {
        let prefix = output_prefix(&key_with(OutputPrefixType::Tink, 1)).unwrap();
        assert_eq!(prefix, [0x01, 0x00, 0x00, 0x00, 0x01]);

        let prefix = output_prefix(&key_with(OutputPrefixType::Tink, u32::MAX)).unwrap();
        assert_eq!(prefix, [0x01, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn unknown_prefix_type_fails() {
        assert!(output_prefix(&key_with(OutputPrefixType::UnknownPrefix, 1)).is_err());
    }
}
