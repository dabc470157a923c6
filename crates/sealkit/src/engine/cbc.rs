//! Block-chaining strategy: AES-CBC over PKCS#7-padded plaintext.
//!
//! Framing is `IV ‖ ciphertext` with a fresh one-block IV per seal. There is
//! no integrity check in this mode: a tampered blob decrypts to garbage
//! rather than failing, unless the padding happens to become invalid.
//! Callers must not treat a successful unpad as proof of authenticity.

use aes::cipher::consts::U16;
use aes::cipher::generic_array::GenericArray;
use aes::cipher::{
    BlockCipher, BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut, BlockSizeUser,
    KeyInit, KeyIvInit,
};
use cbc::{Decryptor, Encryptor};

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

    // The IV must be unique, not secret, so it travels at the front of the
    // blob.
    let mut iv = [0u8; BLOCK_LEN];
    rng.fill(&mut iv);

    let mut enc = Encryptor::<C>::new_from_slices(key, &iv)
        .map_err(|_| SealError::KeyLength(key.len()))?;
    for block in buf.chunks_exact_mut(BLOCK_LEN) {
        enc.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }

    let mut blob = Vec::with_capacity(BLOCK_LEN + buf.len());
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&buf);
    Ok(blob)
}

pub(super) fn open<C>(key: &[u8], blob: &[u8]) -> Result<Vec<u8>, SealError>
where
    C: BlockCipher + BlockSizeUser<BlockSize = U16> + BlockDecrypt + KeyInit,
{
    if blob.len() < BLOCK_LEN {
        return Err(SealError::TooShort {
            len: blob.len(),
            min: BLOCK_LEN,
        });
    }
    let (iv, ciphertext) = blob.split_at(BLOCK_LEN);
    if ciphertext.len() % BLOCK_LEN != 0 {
        return Err(SealError::Misaligned);
    }

    let mut buf = ciphertext.to_vec();
    let mut dec = Decryptor::<C>::new_from_slices(key, iv)
        .map_err(|_| SealError::KeyLength(key.len()))?;
    for block in buf.chunks_exact_mut(BLOCK_LEN) {
        dec.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }

    padding::unpad(&mut buf)?;
    Ok(buf)
}
