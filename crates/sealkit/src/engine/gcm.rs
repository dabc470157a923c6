//! AEAD strategy: AES-GCM with a 96-bit random nonce and empty associated
//! data.
//!
//! Framing is `nonce ‖ ciphertext‖tag`; the tag is appended by the AEAD
//! primitive itself. This is the only strategy that explicitly distinguishes
//! tampering or a wrong key from success. Nonce reuse under the same key
//! breaks both confidentiality and authentication, so the nonce is drawn
//! fresh from the CSPRNG on every seal. No padding: the primitive is
//! stream-like over the exact plaintext length.

use aes::cipher::consts::{U12, U16};
use aes::cipher::{BlockCipher, BlockEncrypt, BlockSizeUser, KeyInit};
use aes_gcm::aead::Aead;
use aes_gcm::{AesGcm, Nonce};

use super::NONCE_LEN;
use crate::error::SealError;
use crate::random::RandomSource;

type Gcm<C> = AesGcm<C, U12>;

pub(super) fn seal<C>(
    key: &[u8],
    plaintext: &[u8],
    rng: &dyn RandomSource,
) -> Result<Vec<u8>, SealError>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + KeyInit,
{
    let cipher = Gcm::<C>::new_from_slice(key).map_err(|_| SealError::KeyLength(key.len()))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rng.fill(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|_| SealError::Authentication)?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

pub(super) fn open<C>(key: &[u8], blob: &[u8]) -> Result<Vec<u8>, SealError>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + KeyInit,
{
    if blob.len() < NONCE_LEN {
        return Err(SealError::TooShort {
            len: blob.len(),
            min: NONCE_LEN,
        });
    }
    let (nonce_bytes, sealed) = blob.split_at(NONCE_LEN);

    let cipher = Gcm::<C>::new_from_slice(key).map_err(|_| SealError::KeyLength(key.len()))?;
    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), sealed)
        .map_err(|_| SealError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MockRandomSource;
    use aes::Aes128;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    const KEY: &[u8] = b"abcdefghijklmnop";
    const NONCE: [u8; NONCE_LEN] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

    // AES-128-GCM of "foobar" under KEY and NONCE, verified against an
    // independent implementation.
    const VECTOR: &str = "AAECAwQFBgcICQoLwa31E1GF0c5chk7mYlElhJYz7Mjtkw==";

    fn fixed_rng() -> MockRandomSource {
        let mut rng = MockRandomSource::new();
        rng.expect_fill()
            .returning(|dest| dest.copy_from_slice(&NONCE));
        rng
    }

    #[test]
    fn seal_matches_known_vector() {
        let blob = seal::<Aes128>(KEY, b"foobar", &fixed_rng()).unwrap();
        assert_eq!(blob, STANDARD.decode(VECTOR).unwrap());
    }

    #[test]
    fn open_matches_known_vector() {
        let blob = STANDARD.decode(VECTOR).unwrap();
        assert_eq!(open::<Aes128>(KEY, &blob).unwrap(), b"foobar");
    }

    #[test]
    fn any_flipped_byte_fails_authentication() {
        let blob = STANDARD.decode(VECTOR).unwrap();
        for i in 0..blob.len() {
            let mut tampered = blob.clone();
            tampered[i] ^= 0x01;
            assert!(
                matches!(
                    open::<Aes128>(KEY, &tampered),
                    Err(SealError::Authentication)
                ),
                "byte {i} flipped but open did not fail closed"
            );
        }
    }

    #[test]
    fn nonce_only_blob_fails_authentication() {
        // Long enough to frame, too short to carry a tag.
        assert!(matches!(
            open::<Aes128>(KEY, &NONCE),
            Err(SealError::Authentication)
        ));
    }

    #[test]
    fn short_blob_is_rejected() {
        assert!(matches!(
            open::<Aes128>(KEY, &NONCE[..NONCE_LEN - 1]),
            Err(SealError::TooShort { .. })
        ));
    }
}
