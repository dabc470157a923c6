//! Validated AES key material.

use crate::error::SealError;

/// Key material for one of the supported AES variants.
///
/// The variant fixes the cipher the engine will instantiate, so a length
/// check never has to be repeated once a [`Key`] exists.
#[derive(Clone)]
pub(crate) enum KeyBytes {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

/// A validated symmetric key of 16, 24, or 32 bytes.
///
/// The key is caller-owned and never persisted by this crate. When a [`Key`]
/// is dropped, its bytes are overwritten with zeroes to minimise the window
/// during which key material lives in RAM.
#[derive(Clone)]
pub struct Key(pub(crate) KeyBytes);

impl Key {
    /// Build a [`Key`] from raw bytes.
    ///
    /// A wrong-length slice is a caller-side contract violation, discoverable
    /// before any data is processed; most callers treat the error as fatal.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::KeyLength`] if `bytes` is not 16, 24, or 32 bytes.
    pub fn new(bytes: &[u8]) -> Result<Self, SealError> {
        match bytes.len() {
            16 => {
                let mut k = [0u8; 16];
                k.copy_from_slice(bytes);
                Ok(Key(KeyBytes::Aes128(k)))
            }
            24 => {
                let mut k = [0u8; 24];
                k.copy_from_slice(bytes);
                Ok(Key(KeyBytes::Aes192(k)))
            }
            32 => {
                let mut k = [0u8; 32];
                k.copy_from_slice(bytes);
                Ok(Key(KeyBytes::Aes256(k)))
            }
            n => Err(SealError::KeyLength(n)),
        }
    }

    pub(crate) fn material(&self) -> &KeyBytes {
        &self.0
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = SealError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Key::new(bytes)
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        // Zero the key material on drop.
        let bytes: &mut [u8] = match &mut self.0 {
            KeyBytes::Aes128(k) => k,
            KeyBytes::Aes192(k) => k,
            KeyBytes::Aes256(k) => k,
        };
        bytes.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("Key([REDACTED])")
    }
}
