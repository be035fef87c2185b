//! Lai-Massey network with a wide PRF as round function
//!
//! # Structure
//!
//! ```text
//! L, R = plaintext halves ⊕ pre-whitening
//! for round i in 0..N:
//!     M = PRF(k_i, (L ⊕ R) || 0^8)[..8]
//!     L ^= M; R ^= M
//!     if i < N - 1: L = sigma(L)
//! ciphertext = (L || R) ⊕ post-whitening
//! ```
//!
//! `L ⊕ R` is unchanged by the mixing step, so decryption recomputes the same
//! `M` from the output halves. `sigma` is the orthomorphism
//! `(a, b) -> (b, a ⊕ b)`. It is skipped after the final round, where it
//! would add no diffusion before the output.

use zeroize::Zeroizing;

use crate::{
    block::{
        BLOCK_SIZE, KEY_SIZE, PaddedHalf, inverse_orthomorphism, join_block, orthomorphism,
        split_block,
    },
    cipher::BlockCipher,
    prf::{HChaCha20, PRF_OUTPUT_SIZE, Prf},
    schedule::KeySchedule,
};

/// `HChaChaCha128l`: 6-round Lai-Massey network over `HChaCha20`.
pub type HChaChaCha128l = LaiMassey<HChaCha20, 6>;

/// Lai-Massey network with `ROUNDS` PRF rounds.
#[derive(Debug, Clone, Copy)]
pub struct LaiMassey<P, const ROUNDS: usize> {
    prf: P,
}

impl<P: Default, const ROUNDS: usize> LaiMassey<P, ROUNDS> {
    /// Create a cipher using the default PRF instance.
    pub fn new() -> Self {
        Self::with_prf(P::default())
    }
}

impl<P: Default, const ROUNDS: usize> Default for LaiMassey<P, ROUNDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, const ROUNDS: usize> LaiMassey<P, ROUNDS> {
    /// Create a cipher over the given PRF.
    pub fn with_prf(prf: P) -> Self {
        Self { prf }
    }
}

impl<P: Prf, const ROUNDS: usize> LaiMassey<P, ROUNDS> {
    /// XOR `PRF(round_key, L ⊕ R)` into both halves.
    ///
    /// An involution for a fixed round key.
    fn mix(
        &self,
        round_key: &[u8; KEY_SIZE],
        left: &mut PaddedHalf,
        right: &mut PaddedHalf,
        combined: &mut PaddedHalf,
        output: &mut [u8; PRF_OUTPUT_SIZE],
    ) {
        combined.set_xor(left.half(), right.half());
        self.prf.derive_key(output, round_key, combined.as_prf_input());
        left.xor(&output[..]);
        right.xor(&output[..]);
    }
}

impl<P: Prf, const ROUNDS: usize> BlockCipher for LaiMassey<P, ROUNDS> {
    const ROUNDS: usize = ROUNDS;

    fn encrypt_block(
        &self,
        plaintext: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
    ) -> [u8; BLOCK_SIZE] {
        tracing::trace!(rounds = ROUNDS, "lai-massey encrypt");
        let schedule = KeySchedule::<ROUNDS>::derive(&self.prf, key);
        let mut output = Zeroizing::new([0u8; PRF_OUTPUT_SIZE]);
        let mut combined = PaddedHalf::zeroed();
        let (mut left, mut right) = split_block(plaintext);

        left.xor(schedule.pre_whitening_left());
        right.xor(schedule.pre_whitening_right());

        for (round, round_key) in schedule.round_keys().iter().enumerate() {
            self.mix(round_key, &mut left, &mut right, &mut combined, &mut output);

            if round < ROUNDS - 1 {
                orthomorphism(left.half_mut());
            }
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
        tracing::trace!(rounds = ROUNDS, "lai-massey decrypt");
        let schedule = KeySchedule::<ROUNDS>::derive(&self.prf, key);
        let mut output = Zeroizing::new([0u8; PRF_OUTPUT_SIZE]);
        let mut combined = PaddedHalf::zeroed();
        let (mut left, mut right) = split_block(ciphertext);

        left.xor(schedule.post_whitening_left());
        right.xor(schedule.post_whitening_right());

        for (round, round_key) in schedule.round_keys().iter().enumerate().rev() {
            if round < ROUNDS - 1 {
                inverse_orthomorphism(left.half_mut());
            }

            self.mix(round_key, &mut left, &mut right, &mut combined, &mut output);
        }

        left.xor(schedule.pre_whitening_left());
        right.xor(schedule.pre_whitening_right());

        join_block(&left, &right)
    }
}
