//! Cryptographically secure randomness for IVs and nonces.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

/// Source of IV/nonce bytes.
///
/// The engine draws one IV or nonce per `seal` call through this trait.
/// Implementations must be safe for concurrent use; the trait carries no
/// state of its own.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Fill `dest` with cryptographically secure random bytes.
    fn fill(&self, dest: &mut [u8]);
}

/// Default [`RandomSource`] backed by the operating-system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_with_fresh_bytes() {
        let mut a = [0u8; 16];
        let mut b = [0u8; 16];
        OsRandom.fill(&mut a);
        OsRandom.fill(&mut b);
        // Two identical 128-bit draws would indicate a broken generator.
        assert_ne!(a, b);
    }
}
