//! Capability traits implemented by primitives and their wrapped forms.
//!
//! Each trait is object-safe and `Send + Sync` so constructed primitives can
//! be shared across threads behind an `Arc`.

use crate::errors::Result;

/// Message authentication code.
pub trait Mac: Send + Sync {
    /// Compute an authentication tag over `data`.
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Verify that `mac` authenticates `data`.
    fn verify_mac(&self, mac: &[u8], data: &[u8]) -> Result<()>;
}

/// Authenticated encryption with associated data.
pub trait Aead: Send + Sync {
    /// Encrypt `plaintext`, binding `associated_data` to the ciphertext.
    fn encrypt(&self, plaintext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt `ciphertext`, checking the binding of `associated_data`.
    fn decrypt(&self, ciphertext: &[u8], associated_data: &[u8]) -> Result<Vec<u8>>;
}

/// Deterministic authenticated encryption with associated data.
///
/// Identical `(plaintext, associated_data)` pairs produce identical
/// ciphertexts; callers accept the resulting leak of equality.
pub trait DeterministicAead: Send + Sync {
    /// Deterministically encrypt `plaintext` bound to `associated_data`.
    fn encrypt_deterministically(
        &self,
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>>;

    /// Decrypt a deterministic ciphertext bound to `associated_data`.
    fn decrypt_deterministically(
        &self,
        ciphertext: &[u8],
        associated_data: &[u8],
    ) -> Result<Vec<u8>>;
}

/// Encryption half of hybrid public-key encryption.
///
/// `context_info` is public data bound to the ciphertext; its integrity is
/// checked on decryption but it is neither secret nor authenticated as
/// coming from the sender.
pub trait HybridEncrypt: Send + Sync {
    /// Encrypt `plaintext` for the recipient, binding `context_info`.
    fn encrypt(&self, plaintext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}

/// Decryption half of hybrid public-key encryption.
pub trait HybridDecrypt: Send + Sync {
    /// Decrypt `ciphertext`, checking the binding of `context_info`.
    fn decrypt(&self, ciphertext: &[u8], context_info: &[u8]) -> Result<Vec<u8>>;
}

/// Digital-signature producer.
pub trait Signer: Send + Sync {
    /// Sign `data`.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// Digital-signature verifier.
pub trait Verifier: Send + Sync {
    /// Verify that `signature` covers `data`.
    fn verify(&self, signature: &[u8], data: &[u8]) -> Result<()>;
}
