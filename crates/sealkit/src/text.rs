//! Base64 text transport over the binary seal/open contract.
//!
//! Standard alphabet, padded — the blob survives any text-oriented channel
//! and maps back to the same bytes.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::engine::Cipher;
use crate::error::SealError;

impl Cipher {
    /// Seal `plaintext` and encode the blob as base64 text.
    ///
    /// # Errors
    ///
    /// Propagates any [`Cipher::seal`] error; the encoding step itself cannot
    /// fail.
    pub fn seal_text(&self, plaintext: &[u8]) -> Result<String, SealError> {
        Ok(STANDARD.encode(self.seal(plaintext)?))
    }

    /// Decode base64 `text` and open the resulting blob.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::Encoding`] if `text` is not valid base64, plus
    /// any [`Cipher::open`] error.
    pub fn open_text(&self, text: &str) -> Result<Vec<u8>, SealError> {
        let blob = STANDARD.decode(text)?;
        self.open(&blob)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Cipher, Key, Mode, SealError};

    const KEY: &[u8] = b"abcdefghijklmnop";

    fn cipher(mode: Mode) -> Cipher {
        Cipher::new(mode, Key::new(KEY).unwrap())
    }

    #[test]
    fn text_round_trip_every_mode() {
        for mode in [Mode::Cbc, Mode::Gcm, Mode::Cfb] {
            let c = cipher(mode);
            let text = c.seal_text("网址：mitnk.com".as_bytes()).unwrap();
            assert!(text.is_ascii(), "mode {mode}");
            assert_eq!(c.open_text(&text).unwrap(), "网址：mitnk.com".as_bytes());
        }
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let c = cipher(Mode::Gcm);
        let text = c.seal_text(b"").unwrap();
        assert_eq!(c.open_text(&text).unwrap(), b"");
    }

    #[test]
    fn non_utf8_bytes_round_trip() {
        let payload: Vec<u8> = vec![0x00, 0xFF, 0x80, 0x07, 0x1B, 0xFE];
        let c = cipher(Mode::Cbc);
        let text = c.seal_text(&payload).unwrap();
        assert_eq!(c.open_text(&text).unwrap(), payload);
    }

    #[test]
    fn invalid_base64_is_an_encoding_error() {
        let c = cipher(Mode::Gcm);
        assert!(matches!(
            c.open_text("not//valid==base64!"),
            Err(SealError::Encoding(_))
        ));
    }

    #[test]
    fn opens_legacy_text_ciphertext() {
        // Ciphertext generated by a separate Python implementation of this
        // scheme.
        let c = cipher(Mode::Cfb);
        let plaintext = c
            .open_text("iEtr9vuP3i3PqO0oSOK8yg8t99JmwlNjYWTZVf03bK0btYjeY7gvxATnOSilrOAE")
            .unwrap();
        assert_eq!(String::from_utf8(plaintext).unwrap(), "网址：mitnk.com");
    }
}
