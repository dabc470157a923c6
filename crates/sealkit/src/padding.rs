//! PKCS#7 block-alignment padding for the CBC and CFB strategies.

use crate::engine::BLOCK_LEN;
use crate::error::SealError;

/// Extend `data` to a multiple of the cipher block size.
///
/// The padding count is always in `[1, BLOCK_LEN]`: an already-aligned input
/// still receives a full block of padding, so `unpad` can always read the
/// count from the last byte. Every padding byte equals the count.
pub(crate) fn pad(data: &[u8]) -> Vec<u8> {
    let padding = BLOCK_LEN - data.len() % BLOCK_LEN;
    let mut out = Vec::with_capacity(data.len() + padding);
    out.extend_from_slice(data);
    out.extend(std::iter::repeat(padding as u8).take(padding));
    out
}

/// Strip PKCS#7 padding in place.
///
/// The full padding pattern is verified, not just the count: a count of zero,
/// a count exceeding the block size or the input length, and any trailing
/// byte differing from the count all fail with the same [`SealError::Unpad`],
/// so malformed inputs are indistinguishable from each other. In practice
/// this error means the ciphertext was decrypted with the wrong key.
pub(crate) fn unpad(data: &mut Vec<u8>) -> Result<(), SealError> {
    let padding = *data.last().ok_or(SealError::Unpad)? as usize;
    if padding == 0 || padding > BLOCK_LEN || padding > data.len() {
        return Err(SealError::Unpad);
    }
    let body_len = data.len() - padding;
    if data[body_len..].iter().any(|&b| b as usize != padding) {
        return Err(SealError::Unpad);
    }
    data.truncate(body_len);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_input_gets_a_full_extra_block() {
        let padded = pad(&[b'a'; BLOCK_LEN]);
        assert_eq!(padded.len(), 2 * BLOCK_LEN);
        assert!(padded[BLOCK_LEN..].iter().all(|&b| b == BLOCK_LEN as u8));
    }

    #[test]
    fn empty_input_pads_to_one_block() {
        let padded = pad(&[]);
        assert_eq!(padded, vec![BLOCK_LEN as u8; BLOCK_LEN]);
    }

    #[test]
    fn round_trip_recovers_exact_length() {
        for len in [0usize, 1, 7, 15, 16, 17, 31, 32, 100] {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let mut padded = pad(&data);
            assert_eq!(padded.len() % BLOCK_LEN, 0);
            unpad(&mut padded).unwrap();
            assert_eq!(padded, data, "len {len}");
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(unpad(&mut Vec::new()), Err(SealError::Unpad)));
    }

    #[test]
    fn rejects_zero_count() {
        let mut data = vec![1, 2, 3, 0];
        assert!(matches!(unpad(&mut data), Err(SealError::Unpad)));
    }

    #[test]
    fn rejects_count_beyond_block_size() {
        let mut data = vec![17u8; 2 * BLOCK_LEN];
        assert!(matches!(unpad(&mut data), Err(SealError::Unpad)));
    }

    #[test]
    fn rejects_count_beyond_input_length() {
        let mut data = vec![1, 2, 3, 9];
        assert!(matches!(unpad(&mut data), Err(SealError::Unpad)));
    }

    #[test]
    fn rejects_inconsistent_pattern() {
        let mut data = pad(b"hello");
        let last = data.len() - 2;
        data[last] ^= 0xFF;
        assert!(matches!(unpad(&mut data), Err(SealError::Unpad)));
    }
}
