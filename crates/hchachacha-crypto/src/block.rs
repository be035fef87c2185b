//! Block layout, half-block buffers and the Lai-Massey orthomorphism

use zeroize::Zeroize;

use crate::prf::{PRF_INPUT_SIZE, PRF_KEY_SIZE};

/// Block size (16 bytes)
pub const BLOCK_SIZE: usize = 16;

/// Half-block size (8 bytes)
pub const HALF_SIZE: usize = BLOCK_SIZE / 2;

/// Master key size (32 bytes)
pub const KEY_SIZE: usize = PRF_KEY_SIZE;

/// Quarter-block size, the unit the orthomorphism permutes (4 bytes)
const QUARTER_SIZE: usize = HALF_SIZE / 2;

/// One half of the block, stored at the front of a zeroed PRF input.
///
/// The PRF input is wider than a half, so the trailing bytes stay zero and the
/// buffer can be handed to the PRF directly.
pub(crate) struct PaddedHalf {
    buf: [u8; PRF_INPUT_SIZE],
}

impl PaddedHalf {
    /// A zeroed half.
    pub(crate) fn zeroed() -> Self {
        Self { buf: [0u8; PRF_INPUT_SIZE] }
    }

    /// Copy `HALF_SIZE` bytes of block data into the half.
    pub(crate) fn from_half(half: &[u8]) -> Self {
        debug_assert_eq!(half.len(), HALF_SIZE);
        let mut padded = Self::zeroed();
        padded.buf[..HALF_SIZE].copy_from_slice(half);
        padded
    }

    /// The half-block bytes.
    pub(crate) fn half(&self) -> &[u8] {
        &self.buf[..HALF_SIZE]
    }

    /// Mutable half-block bytes. The padding is not reachable.
    pub(crate) fn half_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..HALF_SIZE]
    }

    /// The full zero-padded PRF input.
    pub(crate) fn as_prf_input(&self) -> &[u8; PRF_INPUT_SIZE] {
        &self.buf
    }

    /// XOR `mask` into the half. Only the first `HALF_SIZE` mask bytes are used.
    pub(crate) fn xor(&mut self, mask: &[u8]) {
        xor_in_place(self.half_mut(), mask);
    }

    /// Overwrite the half with `a ^ b`.
    pub(crate) fn set_xor(&mut self, a: &[u8], b: &[u8]) {
        for ((out, x), y) in self.half_mut().iter_mut().zip(a).zip(b) {
            *out = x ^ y;
        }
    }
}

impl Drop for PaddedHalf {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

/// XOR `src` into `dst`, byte by byte, over the length of `dst`.
///
/// Wide PRF outputs therefore contribute only their prefix.
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    debug_assert!(src.len() >= dst.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

/// Split a block into its left and right halves.
pub(crate) fn split_block(block: &[u8; BLOCK_SIZE]) -> (PaddedHalf, PaddedHalf) {
    let (left, right) = block.split_at(HALF_SIZE);
    (PaddedHalf::from_half(left), PaddedHalf::from_half(right))
}

/// Join two halves into `Left || Right`.
pub(crate) fn join_block(left: &PaddedHalf, right: &PaddedHalf) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block[..HALF_SIZE].copy_from_slice(left.half());
    block[HALF_SIZE..].copy_from_slice(right.half());
    block
}

/// Linear orthomorphism on one half: `(a, b) -> (b, a ^ b)` over 4-byte
/// quarters.
///
/// `x -> sigma(x) ^ x` is also a permutation, which keeps Lai-Massey rounds
/// from collapsing when the halves become equal.
pub(crate) fn orthomorphism(half: &mut [u8]) {
    debug_assert_eq!(half.len(), HALF_SIZE);
    let (first, second) = half.split_at_mut(QUARTER_SIZE);
    // (b, a)
    first.swap_with_slice(second);
    // (b, a ^ b)
    xor_in_place(second, first);
}

/// Inverse of [`orthomorphism`]: `(b, a ^ b) -> (a, b)`.
pub(crate) fn inverse_orthomorphism(half: &mut [u8]) {
    debug_assert_eq!(half.len(), HALF_SIZE);
    let (first, second) = half.split_at_mut(QUARTER_SIZE);
    // (a ^ b, b)
    first.swap_with_slice(second);
    // (a, b)
    xor_in_place(first, second);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthomorphism_maps_quarters() {
        let mut half = [0x01, 0x02, 0x03, 0x04, 0x10, 0x20, 0x30, 0x40];
        orthomorphism(&mut half);
        assert_eq!(half, [0x10, 0x20, 0x30, 0x40, 0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn inverse_orthomorphism_undoes_orthomorphism() {
        let original = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67];
        let mut half = original;

        orthomorphism(&mut half);
        assert_ne!(half, original);
        inverse_orthomorphism(&mut half);

        assert_eq!(half, original);
    }

    #[test]
    fn orthomorphism_minus_identity_is_a_permutation() {
        // Check x -> sigma(x) ^ x is injective over single-byte-lane inputs
        let mut seen = std::collections::HashSet::new();
        for a in 0..=u8::MAX {
            for b in [0u8, 1, 0x80, 0xff] {
                let x = [a, 0, 0, 0, b, 0, 0, 0];
                let mut sigma = x;
                orthomorphism(&mut sigma);
                xor_in_place(&mut sigma, &x);
                assert!(seen.insert(sigma), "collision for a={a:#04x} b={b:#04x}");
            }
        }
    }

    #[test]
    fn padded_half_keeps_padding_zero() {
        let mut half = PaddedHalf::from_half(&[0xff; HALF_SIZE]);
        half.xor(&[0x0f; 32]);

        assert_eq!(half.half(), &[0xf0u8; HALF_SIZE]);
        assert_eq!(&half.as_prf_input()[HALF_SIZE..], &[0u8; PRF_INPUT_SIZE - HALF_SIZE]);
    }

    #[test]
    fn set_xor_combines_halves() {
        let mut combined = PaddedHalf::zeroed();
        combined.set_xor(&[0xaa; HALF_SIZE], &[0x0f; HALF_SIZE]);
        assert_eq!(combined.half(), &[0xa5u8; HALF_SIZE]);
    }

    #[test]
    fn split_then_join_preserves_block() {
        let block: [u8; BLOCK_SIZE] = core::array::from_fn(|i| i as u8);
        let (left, right) = split_block(&block);

        assert_eq!(left.half(), &block[..HALF_SIZE]);
        assert_eq!(right.half(), &block[HALF_SIZE..]);
        assert_eq!(join_block(&left, &right), block);
    }
}
