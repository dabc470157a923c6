//! Error types produced by the seal/open engine.

use thiserror::Error;

/// Errors produced by sealing, opening, or key construction.
///
/// [`SealError::KeyLength`] is a caller-side contract violation: it is
/// detected when the [`Key`](crate::Key) is built, before any data is
/// processed. Every other variant is an ordinary recoverable result of
/// feeding malformed, truncated, or tampered ciphertext to `open`.
///
/// On any failure path no plaintext — partial or otherwise — is returned.
#[derive(Debug, Error)]
pub enum SealError {
    /// The supplied key is not a supported AES key size.
    #[error("unsupported key length {0}: expected 16, 24, or 32 bytes")]
    KeyLength(usize),

    /// The blob is shorter than the mode's minimum framing size
    /// (one IV or nonce).
    #[error("ciphertext too short: {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },

    /// Block-chaining ciphertext is not a whole number of cipher blocks.
    #[error("ciphertext is not a multiple of the cipher block size")]
    Misaligned,

    /// The trailing padding is implausible or inconsistent. The usual cause
    /// is decrypting with a key other than the one used to encrypt.
    #[error("unpad error: invalid padding, possibly an incorrect encryption key")]
    Unpad,

    /// AEAD tag verification failed: the blob was tampered with or the key is
    /// wrong. Also covers the (practically unreachable) failure of the AEAD
    /// encrypt itself.
    #[error("decryption failed: authentication error or incorrect key")]
    Authentication,

    /// The text form is not valid base64.
    #[error("invalid base64 ciphertext: {0}")]
    Encoding(#[from] base64::DecodeError),
}
