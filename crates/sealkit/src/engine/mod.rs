//! The cipher-mode engine: mode selection, key dispatch, and blob framing.
//!
//! A [`Cipher`] is built once from a [`Mode`] and a [`Key`] and then exposes
//! `seal`/`open` over byte payloads. Each call draws a fresh IV or nonce,
//! frames it at the front of the blob, and applies the strategy the mode
//! names. The engine holds no state across calls, so a `Cipher` can be shared
//! freely between threads.

mod cbc;
mod cfb;
mod gcm;

use std::fmt;
use std::str::FromStr;

use aes::cipher::consts::U16;
use aes::cipher::{BlockCipher, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::error::SealError;
use crate::key::{Key, KeyBytes};
use crate::random::{OsRandom, RandomSource};

/// Byte length of one AES block, and of the IV framed by the CBC and CFB
/// modes.
pub const BLOCK_LEN: usize = 16;

/// Byte length of the GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// The cipher mode a [`Cipher`] applies.
///
/// All three modes share the `seal`/`open` contract and blob framing; they
/// differ in the transform applied after the IV/nonce and in what `open` can
/// detect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// AES-CBC with PKCS#7 padding. No integrity check: tampered ciphertext
    /// decrypts to garbage rather than failing, unless the padding happens to
    /// become invalid.
    Cbc,
    /// AES-GCM with a 96-bit nonce and empty associated data. The only mode
    /// that explicitly distinguishes tampering or a wrong key from success.
    Gcm,
    /// AES-CFB (full-block feedback) with the same padding and framing as
    /// [`Mode::Cbc`].
    Cfb,
}

impl Default for Mode {
    /// GCM: the mode to reach for when integrity matters.
    fn default() -> Self {
        Mode::Gcm
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Cbc => "cbc",
            Mode::Gcm => "gcm",
            Mode::Cfb => "cfb",
        })
    }
}

/// Error returned when a mode name cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown cipher mode {0:?}: expected \"cbc\", \"gcm\", or \"cfb\"")]
pub struct UnknownMode(String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cbc" => Ok(Mode::Cbc),
            "gcm" => Ok(Mode::Gcm),
            "cfb" => Ok(Mode::Cfb),
            _ => Err(UnknownMode(s.to_owned())),
        }
    }
}

/// A mode/key pair exposing `seal` and `open`.
///
/// Construction is the only place key material is validated; every runtime
/// error after that point concerns the shape or integrity of the data, never
/// the key length.
pub struct Cipher {
    mode: Mode,
    key: Key,
    rng: Box<dyn RandomSource>,
}

impl Cipher {
    /// Build a cipher for `mode` keyed by `key`, drawing IVs and nonces from
    /// the operating-system CSPRNG.
    pub fn new(mode: Mode, key: Key) -> Self {
        Self::with_random_source(mode, key, Box::new(OsRandom))
    }

    /// Build a cipher with an explicit [`RandomSource`].
    ///
    /// Intended for tests that need deterministic IVs; production callers
    /// should use [`Cipher::new`].
    pub fn with_random_source(mode: Mode, key: Key, rng: Box<dyn RandomSource>) -> Self {
        Self { mode, key, rng }
    }

    /// The mode this cipher was built with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Encrypt `plaintext` into a self-describing blob.
    ///
    /// A fresh IV/nonce is drawn per call, so two seals of identical
    /// plaintext produce different blobs that both open to the original.
    ///
    /// # Errors
    ///
    /// Practically infallible for a valid [`Key`]; errors surface only if the
    /// underlying primitive rejects its inputs.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, SealError> {
        trace!(mode = %self.mode, plaintext_len = plaintext.len(), "seal");
        match self.key.material() {
            KeyBytes::Aes128(k) => self.seal_with::<Aes128>(k, plaintext),
            KeyBytes::Aes192(k) => self.seal_with::<Aes192>(k, plaintext),
            KeyBytes::Aes256(k) => self.seal_with::<Aes256>(k, plaintext),
        }
    }

    /// Decrypt a blob produced by [`Cipher::seal`] under the same mode and
    /// key.
    ///
    /// # Errors
    ///
    /// [`SealError::TooShort`] if the blob cannot hold one IV/nonce;
    /// [`SealError::Misaligned`] for non-block-aligned CBC ciphertext;
    /// [`SealError::Unpad`] when padding fails to verify (CBC/CFB, commonly a
    /// wrong key); [`SealError::Authentication`] when the GCM tag does not
    /// verify. No partial plaintext is ever returned.
    pub fn open(&self, blob: &[u8]) -> Result<Vec<u8>, SealError> {
        trace!(mode = %self.mode, blob_len = blob.len(), "open");
        let result = match self.key.material() {
            KeyBytes::Aes128(k) => self.open_with::<Aes128>(k, blob),
            KeyBytes::Aes192(k) => self.open_with::<Aes192>(k, blob),
            KeyBytes::Aes256(k) => self.open_with::<Aes256>(k, blob),
        };
        if let Err(e) = &result {
            debug!(mode = %self.mode, error = %e, "open failed");
        }
        result
    }

    fn seal_with<C>(&self, key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, SealError>
    where
        C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + BlockDecrypt + KeyInit,
    {
        match self.mode {
            Mode::Cbc => cbc::seal::<C>(key, plaintext, self.rng.as_ref()),
            Mode::Gcm => gcm::seal::<C>(key, plaintext, self.rng.as_ref()),
            Mode::Cfb => cfb::seal::<C>(key, plaintext, self.rng.as_ref()),
        }
    }

    fn open_with<C>(&self, key: &[u8], blob: &[u8]) -> Result<Vec<u8>, SealError>
    where
        C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + BlockDecrypt + KeyInit,
    {
        match self.mode {
            Mode::Cbc => cbc::open::<C>(key, blob),
            Mode::Gcm => gcm::open::<C>(key, blob),
            Mode::Cfb => cfb::open::<C>(key, blob),
        }
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The key and the RNG stay out of debug output.
        f.debug_struct("Cipher")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
