//! Stream-feedback strategy: AES-CFB keystream XOR with CBC-style framing.
//!
//! Pads and frames exactly like the block-chaining strategy, but the cipher
//! runs in self-synchronising full-block feedback mode, so the ciphertext
//! needs no block alignment. `open` deliberately skips the alignment check
//! the CBC strategy performs; the relaxed check is specific to this mode.

use aes::cipher::consts::U16;
use aes::cipher::{AsyncStreamCipher, BlockCipher, BlockEncrypt, BlockSizeUser, KeyInit, KeyIvInit};
use cfb_mode::{Decryptor, Encryptor};

use super::BLOCK_LEN;
use crate::error::SealError;
use crate::padding;
use crate::random::RandomSource;

pub(super) fn seal<C>(
    key: &[u8],
    plaintext: &[u8],
    rng: &dyn RandomSource,
) -> Result<Vec<u8>, SealError>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + KeyInit,
{
    let mut buf = padding::pad(plaintext);

    let mut iv = [0u8; BLOCK_LEN];
    rng.fill(&mut iv);

    Encryptor::<C>::new_from_slices(key, &iv)
        .map_err(|_| SealError::KeyLength(key.len()))?
        .encrypt(&mut buf);

    let mut blob = Vec::with_capacity(BLOCK_LEN + buf.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&buf);
    Ok(blob)
}

pub(super) fn open<C>(key: &[u8], blob: &[u8]) -> Result<Vec<u8>, SealError>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockEncrypt + KeyInit,
{
    if blob.len() < BLOCK_LEN {
        return Err(SealError::TooShort {
            len: blob.len(),
            min: BLOCK_LEN,
        });
    }
    // Feedback mode recovers the keystream from the IV and tolerates
    // ciphertext of any length, so no alignment check here.
    let (iv, ciphertext) = blob.split_at(BLOCK_LEN);

    let mut buf = ciphertext.to_vec();
    Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| SealError::KeyLength(key.len()))?
        .decrypt(&mut buf);

    padding::unpad(&mut buf)?;
    Ok(buf)
}
