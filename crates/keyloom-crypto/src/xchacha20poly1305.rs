//! XChaCha20-Poly1305 AEAD.
//!
//! Ciphertext layout is `nonce || body` where `body` is the ChaCha20
//! ciphertext with the 16-byte Poly1305 tag appended.

use crate::errors::{CryptoError, Result};
use crate::random;
use chacha20poly1305::{
    aead::{Aead as _, KeyInit, Payload},
    Key, XChaCha20Poly1305 as Cipher, XNonce,
};

/// Key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Nonce size in bytes (192 bits).
pub const NONCE_SIZE: usize = 24;

/// Poly1305 tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// XChaCha20-Poly1305 with a fresh random nonce per encryption.
#[derive(Clone)]
pub struct XChaCha20Poly1305 {
    cipher: Cipher,
}

impl XChaCha20Poly1305 {
    /// Create an instance from a 32-byte key.
    pub fn new(key: &[u8]) -> Result<Self> {
        if key.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeySize {
                expected: KEY_SIZE,
                actual: key.len(),
            });
        }
        Ok(XChaCha20Poly1305 {
            cipher: Cipher::new(Key::from_slice(key)),
        })
    }
}

impl crate::traits::Aead for XChaCha20Poly1305 {
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        let nonce = random::get_random_bytes(NONCE_SIZE)?;
        let body = self
            .cipher
            .encrypt(
                XNonce::from_slice(&nonce),
                Payload {
                    msg: plaintext,
                    aad: associated_data,
                },
            )
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        let mut out = Vec::with_capacity(NONCE_SIZE + body.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&body);
        Ok(out)
    }

    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::InvalidCiphertext);
        }
        let (nonce, body) = ciphertext.split_at(NONCE_SIZE);
        self.cipher
            .decrypt(
                XNonce::from_slice(nonce),
                Payload {
                    msg: body,
                    aad: associated_data,
                },
            )
            .map_err(|_| CryptoError::InvalidCiphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Aead;

    #[test]
    fn round_trip() {
        let aead = XChaCha20Poly1305::new(&[42u8; KEY_SIZE]).unwrap();
        let ct = aead.encrypt(b"plaintext", b"ad").unwrap();
        assert_eq!(aead.decrypt(&ct, b"ad").unwrap(), b"plaintext");
    }

    #[test]
    fn nonce_makes_ciphertexts_differ() {
        let aead = XChaCha20Poly1305::new(&[42u8; KEY_SIZE]).unwrap();
        let a = aead.encrypt(b"plaintext", b"").unwrap();
        let b = aead.encrypt(b"plaintext", b"").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn wrong_associated_data_fails() {
        let aead = XChaCha20Poly1305::new(&[42u8; KEY_SIZE]).unwrap();
        let ct = aead.encrypt(b"plaintext", b"ad").unwrap();
        assert!(matches!(
            aead.decrypt(&ct, b"other"),
            Err(CryptoError::InvalidCiphertext)
        ));
    }

    #[test]
    fn tampered_ciphertext_fails() {
        let aead = XChaCha20Poly1305::new(&[42u8; KEY_SIZE]).unwrap();
        let mut ct = aead.encrypt(b"plaintext", b"").unwrap();
        *ct.last_mut().unwrap() ^= 0x01;
        assert!(aead.decrypt(&ct, b"").is_err());
    }

    #[test]
    fn truncated_ciphertext_fails() {
        let aead = XChaCha20Poly1305::new(&[42u8; KEY_SIZE]).unwrap();
        assert!(aead.decrypt(&[0u8; NONCE_SIZE + TAG_SIZE - 1], b"").is_err());
    }

    #[test]
    fn key_size_is_enforced() {
        assert!(matches!(
            XChaCha20Poly1305::new(&[0u8; 16]),
            Err(CryptoError::InvalidKeySize {
                expected: 32,
                actual: 16
            })
        ));
    }
}
