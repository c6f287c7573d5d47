//! The wrapped AEAD primitive.

use keyloom_core::monitoring::{
    get_monitoring_client, keyset_info_from_primitive_set, MonitoringContext, MonitoringLogger,
    NoopLogger,
};
use keyloom_core::primitive_set::{Entry, PrimitiveSet};
use keyloom_core::{cryptofmt, CoreError, Handle, Primitive, Result};
use keyloom_crypto::{Aead, CryptoError};
use std::sync::Arc;

/// Create an AEAD primitive from a keyset handle.
///
/// The returned AEAD encrypts under the keyset's primary key and decrypts
/// against every enabled key, routed by output prefix.
pub fn new_aead(handle: &Handle) -> Result<Arc<dyn Aead>> {
    let set = handle.primitives(|primitive| match primitive {
        Primitive::Aead(aead) => Ok(aead),
        other => Err(CoreError::WrongPrimitive {
            expected: "AEAD",
            actual: other.kind(),
        }),
    })?;
    Ok(Arc::new(WrappedAead::new(set)?))
}

struct WrappedAead {
    set: PrimitiveSet<Arc<dyn Aead>>,
    primary: Arc<Entry<Arc<dyn Aead>>>,
    encrypt_logger: Box<dyn MonitoringLogger>,
    decrypt_logger: Box<dyn MonitoringLogger>,
}

impl WrappedAead {
    fn new(set: PrimitiveSet<Arc<dyn Aead>>) -> Result<WrappedAead> {
        let primary = set
            .primary()
            .cloned()
            .ok_or_else(|| CoreError::Internal("primitive set has no primary".to_string()))?;
        let (encrypt_logger, decrypt_logger) = create_loggers(&set)?;
        Ok(WrappedAead {
            set,
            primary,
            encrypt_logger,
            decrypt_logger,
        })
    }
}

fn create_loggers(
    set: &PrimitiveSet<Arc<dyn Aead>>,
) -> Result<(Box<dyn MonitoringLogger>, Box<dyn MonitoringLogger>)> {
    if set.annotations().is_empty() {
        return Ok((Box::new(NoopLogger), Box::new(NoopLogger)));
    }
    let client = get_monitoring_client();
    let keyset_info = keyset_info_from_primitive_set(set)?;
    let encrypt_logger = client.new_logger(&MonitoringContext {
        primitive: "aead",
        api_function: "encrypt",
        keyset_info: keyset_info.clone(),
    })?;
    let decrypt_logger = client.new_logger(&MonitoringContext {
        primitive: "aead",
        api_function: "decrypt",
        keyset_info,
    })?;
    Ok((encrypt_logger, decrypt_logger))
}

impl Aead for WrappedAead {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> keyloom_crypto::Result<Vec<u8>> {
        let primary = &self.primary;
        let ciphertext = match primary.primitive().encrypt(plaintext, associated_data) {
            Ok(ciphertext) => ciphertext,
            Err(e) => {
                self.encrypt_logger.log_failure();
                return Err(e);
            }
        };
        self.encrypt_logger.log(primary.key_id(), plaintext.len());

        if primary.prefix().is_empty() {
            return Ok(ciphertext);
        }
        let mut out = Vec::with_capacity(primary.prefix().len() + ciphertext.len());
        out.extend_from_slice(primary.prefix());
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> keyloom_crypto::Result<Vec<u8>> {
        // Non-raw candidates first, identified by the prefix.
        if ciphertext.len() > cryptofmt::NON_RAW_PREFIX_SIZE {
            let (prefix, ct_no_prefix) = ciphertext.split_at(cryptofmt::NON_RAW_PREFIX_SIZE);
            for entry in self.set.entries_for_prefix(prefix) {
                if let Ok(plaintext) = entry.primitive().decrypt(ct_no_prefix, associated_data) {
                    self.decrypt_logger.log(entry.key_id(), ct_no_prefix.len());
                    return Ok(plaintext);
                }
            }
        }

        // Raw candidates see the full ciphertext.
        for entry in self.set.raw_entries() {
            if let Ok(plaintext) = entry.primitive().decrypt(ciphertext, associated_data) {
                self.decrypt_logger.log(entry.key_id(), ciphertext.len());
                return Ok(plaintext);
            }
        }

        self.decrypt_logger.log_failure();
        Err(CryptoError::InvalidCiphertext)
    }
}
