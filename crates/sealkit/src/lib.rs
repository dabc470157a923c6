//! Self-describing symmetric encryption blobs.
//!
//! Seals an opaque byte payload under a fixed-length AES key into a single
//! transportable blob that carries its own initialisation value, and opens
//! such blobs back into plaintext. Callers never touch IVs, padding, or
//! encoding. Three cipher modes are selectable behind the same contract:
//!
//! - [`Mode::Cbc`] — block chaining with PKCS#7 padding; no integrity check.
//! - [`Mode::Gcm`] — authenticated encryption; tampering and wrong keys are
//!   detected explicitly. The default.
//! - [`Mode::Cfb`] — stream feedback with CBC-style padding and framing.
//!
//! # Blob format
//!
//! ```text
//! CBC/CFB:  [IV: 16 bytes][ciphertext: n · 16 bytes]
//! GCM:      [nonce: 12 bytes][ciphertext + tag: len + 16 bytes]
//! ```
//!
//! The text transport wraps a blob in standard padded base64 for
//! string-based call sites.
//!
//! # Example
//!
//! ```
//! use sealkit::{Cipher, Key, Mode};
//!
//! # fn main() -> Result<(), sealkit::SealError> {
//! let key = Key::new(b"0123456789abcdef")?;
//! let cipher = Cipher::new(Mode::Gcm, key);
//!
//! let blob = cipher.seal(b"foobar")?;
//! assert_eq!(cipher.open(&blob)?, b"foobar");
//!
//! let text = cipher.seal_text(b"foobar")?;
//! assert_eq!(cipher.open_text(&text)?, b"foobar");
//! # Ok(())
//! # }
//! ```

mod engine;
mod error;
mod key;
mod padding;
mod random;
mod text;

pub use engine::{Cipher, Mode, UnknownMode, BLOCK_LEN, NONCE_LEN, TAG_LEN};
pub use error::SealError;
pub use key::Key;
pub use random::{OsRandom, RandomSource};
