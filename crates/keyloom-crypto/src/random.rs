//! Process random source.

use crate::errors::{CryptoError, Result};
use rand::RngCore;

/// Return `n` uniformly random bytes from the system CSPRNG.
pub fn get_random_bytes(n: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; n];
    rand::thread_rng()
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomGenerationFailed(e.to_string()))?;
    Ok(bytes)
}

/// Return a uniformly random `u32` from the system CSPRNG.
pub fn get_random_u32() -> Result<u32> {
    let mut bytes = [0u8; 4];
    rand::thread_rng()
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomGenerationFailed(e.to_string()))?;
    Ok(u32::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_length_is_honoured() {
        for n in [0, 1, 16, 32, 4096] {
            assert_eq!(get_random_bytes(n).unwrap().len(), n);
        }
    }

    #[test]
    fn outputs_differ() {
        let a = get_random_bytes(32).unwrap();
        let b = get_random_bytes(32).unwrap();
        assert_ne!(a, b);
    }
}
