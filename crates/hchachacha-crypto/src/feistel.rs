//! Balanced Feistel network with a wide PRF as round function
//!
//! # Structure
//!
//! ```text
//! L, R = plaintext halves ⊕ pre-whitening
//! for each round pair (k_i, k_i+1):
//!     L ^= PRF(k_i,   R || 0^8)
//!     R ^= PRF(k_i+1, L || 0^8)
//! ciphertext = (L || R) ⊕ post-whitening
//! ```
//!
//! Decryption runs the pairs backwards with the same PRF calls. Every round is
//! an XOR keyed by the other, unmodified half, so reversing the order inverts
//! the permutation without inverting the PRF.

use zeroize::Zeroizing;

use crate::{
    block::{BLOCK_SIZE, KEY_SIZE, join_block, split_block},
    cipher::BlockCipher,
    prf::{HChaCha20, PRF_OUTPUT_SIZE, Prf},
    schedule::KeySchedule,
};

/// `HChaChaCha`: 8-round Feistel network over `HChaCha20`.
pub type HChaChaCha = Feistel<HChaCha20, 8>;

/// Feistel network with `ROUNDS` PRF rounds.
///
/// Rounds are applied in left/right pairs, so `ROUNDS` must be even.
#[derive(Debug, Clone, Copy)]
pub struct Feistel<P, const ROUNDS: usize> {
    prf: P,
}

impl<P: Default, const ROUNDS: usize> Feistel<P, ROUNDS> {
    /// Create a cipher using the default PRF instance.
    pub fn new() -> Self {
        Self::with_prf(P::default())
    }
}

impl<P: Default, const ROUNDS: usize> Default for Feistel<P, ROUNDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, const ROUNDS: usize> Feistel<P, ROUNDS> {
    /// Create a cipher over the given PRF.
    pub fn with_prf(prf: P) -> Self {
        const { assert!(ROUNDS > 0 && ROUNDS % 2 == 0, "Feistel rounds must be even") };
        Self { prf }
    }
}

impl<P: Prf, const ROUNDS: usize> BlockCipher for Feistel<P, ROUNDS> {
    const ROUNDS: usize = ROUNDS;

    fn encrypt_block(
        &self,
        plaintext: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
    ) -> [u8; BLOCK_SIZE] {
        tracing::trace!(rounds = ROUNDS, "feistel encrypt");
        let schedule = KeySchedule::<ROUNDS>::derive(&self.prf, key);
        let mut output = Zeroizing::new([0u8; PRF_OUTPUT_SIZE]);
        let (mut left, mut right) = split_block(plaintext);

        left.xor(schedule.pre_whitening_left());
        right.xor(schedule.pre_whitening_right());

        for pair in schedule.round_keys().chunks_exact(2) {
            self.prf.derive_key(&mut output, &pair[0], right.as_prf_input());
            left.xor(&output[..]);

            self.prf.derive_key(&mut output, &pair[1], left.as_prf_input());
            right.xor(&output[..]);
        }

        left.xor(schedule.post_whitening_left());
        right.xor(schedule.post_whitening_right());

        join_block(&left, &right)
    }

    fn decrypt_block(
        &self,
        ciphertext: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
    ) -> [u8; BLOCK_SIZE] {
        tracing::trace!(rounds = ROUNDS, "feistel decrypt");
        let schedule = KeySchedule::<ROUNDS>::derive(&self.prf, key);
        let mut output = Zeroizing::new([0u8; PRF_OUTPUT_SIZE]);
        let (mut left, mut right) = split_block(ciphertext);

        left.xor(schedule.post_whitening_left());
        right.xor(schedule.post_whitening_right());

        for pair in schedule.round_keys().chunks_exact(2).rev() {
            self.prf.derive_key(&mut output, &pair[1], left.as_prf_input());
            right.xor(&output[..]);

            self.prf.derive_key(&mut output, &pair[0], right.as_prf_input());
            left.xor(&output[..]);
        }

        left.xor(schedule.pre_whitening_left());
        right.xor(schedule.pre_whitening_right());

        join_block(&left, &right)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        block::HALF_SIZE,
        prf::{PRF_INPUT_SIZE, PRF_KEY_SIZE},
    };

    /// Output is the key XORed with the rotated input repeated twice. Records inputs.
    #[derive(Default)]
    struct XorPrf {
        inputs: RefCell<Vec<[u8; PRF_INPUT_SIZE]>>,
    }

    impl Prf for XorPrf {
        fn derive_key(
            &self,
            output: &mut [u8; PRF_OUTPUT_SIZE],
            key: &[u8; PRF_KEY_SIZE],
            input: &[u8; PRF_INPUT_SIZE],
        ) {
            self.inputs.borrow_mut().push(*input);
            for (i, byte) in output.iter_mut().enumerate() {
                *byte = key[i] ^ input[i % PRF_INPUT_SIZE].rotate_left(1);
            }
        }
    }

    fn test_key() -> [u8; KEY_SIZE] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn roundtrip_with_mock_prf() {
        let cipher = Feistel::<XorPrf, 4>::new();
        let plaintext: [u8; BLOCK_SIZE] = core::array::from_fn(|i| (i * 17) as u8);

        let ciphertext = cipher.encrypt_block(&plaintext, &test_key());
        assert_ne!(ciphertext, plaintext);

        let decrypted = cipher.decrypt_block(&ciphertext, &test_key());
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn encrypt_makes_schedule_plus_one_call_per_round() {
        let cipher = Feistel::<XorPrf, 8>::new();
        cipher.encrypt_block(&[0u8; BLOCK_SIZE], &test_key());

        // 1 whitening + 8 round keys + 8 round functions
        assert_eq!(cipher.prf.inputs.borrow().len(), 17);
    }

    #[test]
    fn round_inputs_are_zero_padded_halves() {
        let cipher = Feistel::<XorPrf, 2>::new();
        cipher.encrypt_block(&[0xffu8; BLOCK_SIZE], &test_key());

        let inputs = cipher.prf.inputs.borrow();
        // Skip whitening and round key derivations
        for input in &inputs[3..] {
            assert_eq!(&input[HALF_SIZE..], &[0u8; PRF_INPUT_SIZE - HALF_SIZE]);
        }
    }

    #[test]
    fn hchacha_roundtrip() {
        let cipher = HChaChaCha::new();
        let key = [0x5au8; KEY_SIZE];
        let plaintext = *b"feistel network!";

        let ciphertext = cipher.encrypt_block(&plaintext, &key);
        assert_eq!(cipher.decrypt_block(&ciphertext, &key), plaintext);
    }

    #[test]
    fn reports_round_count() {
        assert_eq!(<HChaChaCha as BlockCipher>::ROUNDS, 8);
        assert_eq!(<Feistel<HChaCha20, 10> as BlockCipher>::ROUNDS, 10);
    }
}
