//! Counter-mode key schedule
//!
//! Derives the whitening keys and one round key per round from the master
//! key. Every derivation uses a fresh counter value as the PRF input:
//!
//! ```text
//! counter = 0^16
//! counter[15] += 1  → PRF(master, counter) → whitening keys
//! counter[15] += 1  → PRF(master, counter) → round key 0
//! ...
//! counter[15] += 1  → PRF(master, counter) → round key N-1
//! ```
//!
//! Key material depends only on the master key and the counter, never on
//! block data.

use zeroize::Zeroize;

use crate::{
    block::{BLOCK_SIZE, HALF_SIZE, KEY_SIZE},
    prf::{PRF_INPUT_SIZE, PRF_OUTPUT_SIZE, Prf},
};

/// Largest supported round count.
///
/// The counter lives in one byte and whitening takes the first value, so
/// 254 rounds exhausts it without wrapping.
pub const MAX_ROUNDS: usize = u8::MAX as usize - 1;

/// Whitening keys and round keys for one encrypt or decrypt call.
///
/// Zeroized on drop. Never cached across calls.
pub struct KeySchedule<const ROUNDS: usize> {
    /// Pre-whitening (bytes 0-15) then post-whitening (bytes 16-31)
    whitening: [u8; PRF_OUTPUT_SIZE],
    /// One 32-byte key per round, in encryption order
    round_keys: [[u8; KEY_SIZE]; ROUNDS],
}

impl<const ROUNDS: usize> KeySchedule<ROUNDS> {
    /// Derive the schedule for `master_key`.
    ///
    /// Makes exactly `ROUNDS + 1` PRF calls with strictly increasing counters.
    pub fn derive<P: Prf + ?Sized>(prf: &P, master_key: &[u8; KEY_SIZE]) -> Self {
        const { assert!(ROUNDS > 0 && ROUNDS <= MAX_ROUNDS, "round count out of range") };

        let mut schedule =
            Self { whitening: [0u8; PRF_OUTPUT_SIZE], round_keys: [[0u8; KEY_SIZE]; ROUNDS] };
        let mut counter = [0u8; PRF_INPUT_SIZE];

        counter[PRF_INPUT_SIZE - 1] += 1;
        prf.derive_key(&mut schedule.whitening, master_key, &counter);

        for round_key in &mut schedule.round_keys {
            counter[PRF_INPUT_SIZE - 1] += 1;
            prf.derive_key(round_key, master_key, &counter);
        }

        schedule
    }

    /// Whitening applied to the left half before the first round.
    pub fn pre_whitening_left(&self) -> &[u8] {
        &self.whitening[..HALF_SIZE]
    }

    /// Whitening applied to the right half before the first round.
    pub fn pre_whitening_right(&self) -> &[u8] {
        &self.whitening[HALF_SIZE..BLOCK_SIZE]
    }

    /// Whitening applied to the left half after the last round.
    pub fn post_whitening_left(&self) -> &[u8] {
        &self.whitening[BLOCK_SIZE..BLOCK_SIZE + HALF_SIZE]
    }

    /// Whitening applied to the right half after the last round.
    pub fn post_whitening_right(&self) -> &[u8] {
        &self.whitening[BLOCK_SIZE + HALF_SIZE..]
    }

    /// Round keys in encryption order.
    pub fn round_keys(&self) -> &[[u8; KEY_SIZE]; ROUNDS] {
        &self.round_keys
    }
}

impl<const ROUNDS: usize> Zeroize for KeySchedule<ROUNDS> {
    fn zeroize(&mut self) {
        self.whitening.zeroize();
        for round_key in &mut self.round_keys {
            round_key.zeroize();
        }
    }
}

impl<const ROUNDS: usize> Drop for KeySchedule<ROUNDS> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
