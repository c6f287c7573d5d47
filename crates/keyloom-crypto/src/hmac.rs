//! HMAC over the SHA family, with truncated tags.

use crate::errors::{CryptoError, Result};
use ::hmac::{Hmac as HmacImpl, Mac as _};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Minimum accepted key size in bytes.
pub const MIN_KEY_SIZE_IN_BYTES: u32 = 16;

/// Minimum accepted tag size in bytes. Shorter tags are trivially forgeable.
pub const MIN_TAG_SIZE_IN_BYTES: u32 = 10;

fn max_tag_size(hash: &str) -> Result<u32> {
    match hash {
        "SHA1" => Ok(20),
        "SHA224" => Ok(28),
        "SHA256" => Ok(32),
        "SHA384" => Ok(48),
        "SHA512" => Ok(64),
        other => Err(CryptoError::UnsupportedHash(other.to_string())),
    }
}

/// Validate HMAC parameters.
///
/// This is the single authority for parameter validation; key managers
/// delegate here on both the key and key-format paths.
pub fn validate_hmac_params(hash: &str, key_size: u32, tag_size: u32) -> Result<()> {
    let max = max_tag_size(hash)?;
    if tag_size < MIN_TAG_SIZE_IN_BYTES {
        return Err(CryptoError::TagSizeTooSmall {
            min: MIN_TAG_SIZE_IN_BYTES as usize,
            actual: tag_size as usize,
        });
    }
    if tag_size > max {
        return Err(CryptoError::TagSizeTooBig {
            max: max as usize,
            actual: tag_size as usize,
        });
    }
    if key_size < MIN_KEY_SIZE_IN_BYTES {
        return Err(CryptoError::KeyTooShort {
            min: MIN_KEY_SIZE_IN_BYTES as usize,
            actual: key_size as usize,
        });
    }
    Ok(())
}

// Keyed state per hash; holds the derived inner/outer pads, so no raw key
// copy is retained after construction.
#[derive(Clone)]
enum Inner {
    Sha1(HmacImpl<Sha1>),
    Sha224(HmacImpl<Sha224>),
    Sha256(HmacImpl<Sha256>),
    Sha384(HmacImpl<Sha384>),
    Sha512(HmacImpl<Sha512>),
}

/// HMAC with a truncated tag.
#[derive(Clone)]
pub struct Hmac {
    inner: Inner,
    tag_size: usize,
}

impl Hmac {
    /// Create an HMAC instance for the named hash.
    ///
    /// The hash is selected by its stable name (`"SHA1"`, `"SHA224"`,
    /// `"SHA256"`, `"SHA384"`, `"SHA512"`). Parameters are validated via
    /// [`validate_hmac_params`].
    pub fn new(hash: &str, key: &[u8], tag_size: u32) -> Result<Self> {
        validate_hmac_params(hash, key.len() as u32, tag_size)?;
        let inner = match hash {
            "SHA1" => Inner::Sha1(
                HmacImpl::new_from_slice(key).expect("HMAC can take key of any size"),
            ),
            "SHA224" => Inner::Sha224(
                HmacImpl::new_from_slice(key).expect("HMAC can take key of any size"),
            ),
            "SHA256" => Inner::Sha256(
                HmacImpl::new_from_slice(key).expect("HMAC can take key of any size"),
            ),
            "SHA384" => Inner::Sha384(
                HmacImpl::new_from_slice(key).expect("HMAC can take key of any size"),
            ),
            "SHA512" => Inner::Sha512(
                HmacImpl::new_from_slice(key).expect("HMAC can take key of any size"),
            ),
            other => return Err(CryptoError::UnsupportedHash(other.to_string())),
        };
        Ok(Hmac {
            inner,
            tag_size: tag_size as usize,
        })
    }

    fn compute(&self, data: &[u8]) -> Vec<u8> {
        let mut tag = match &self.inner {
            Inner::Sha1(mac) => {
                let mut mac = mac.clone();
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            Inner::Sha224(mac) => {
                let mut mac = mac.clone();
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            Inner::Sha256(mac) => {
                let mut mac = mac.clone();
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            Inner::Sha384(mac) => {
                let mut mac = mac.clone();
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            Inner::Sha512(mac) => {
                let mut mac = mac.clone();
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
        };
        tag.truncate(self.tag_size);
        tag
    }
}

impl crate::traits::Mac for Hmac {
    fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>> {
        Ok(self.compute(data))
    }

    fn verify_mac(&self, mac: &[u8], data: &[u8]) -> Result<()> {
        let expected = self.compute(data);
        if constant_time_compare(mac, &expected) {
            Ok(())
        } else {
            Err(CryptoError::InvalidMac)
        }
    }
}

// Length mismatch returns early; lengths are public.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
