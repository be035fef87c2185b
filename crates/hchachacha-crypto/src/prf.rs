//! Wide-output keyed PRF used for key derivation and round functions
//!
//! The network constructions only depend on the [`Prf`] trait, so they can be
//! exercised against a mock with known outputs.

use chacha20::{
    cipher::{consts::U10, generic_array::GenericArray},
    hchacha,
};
use zeroize::Zeroize;

/// PRF key size (32 bytes)
pub const PRF_KEY_SIZE: usize = 32;

/// PRF input size (16 bytes)
pub const PRF_INPUT_SIZE: usize = 16;

/// PRF output size (32 bytes)
pub const PRF_OUTPUT_SIZE: usize = 32;

/// A deterministic keyed function mapping 16 input bytes to 32 output bytes.
///
/// # Invariants
///
/// - Same `(key, input)` always produces the same output
/// - Total: never fails for well-formed inputs
/// - Must not retain key, input or output after returning
pub trait Prf {
    /// Derive `PRF_OUTPUT_SIZE` bytes from `key` and `input` into `output`.
    fn derive_key(
        &self,
        output: &mut [u8; PRF_OUTPUT_SIZE],
        key: &[u8; PRF_KEY_SIZE],
        input: &[u8; PRF_INPUT_SIZE],
    );
}

impl<P: Prf + ?Sized> Prf for &P {
    fn derive_key(
        &self,
        output: &mut [u8; PRF_OUTPUT_SIZE],
        key: &[u8; PRF_KEY_SIZE],
        input: &[u8; PRF_INPUT_SIZE],
    ) {
        (**self).derive_key(output, key, input);
    }
}

/// `HChaCha20` with the standard `ChaCha` constants.
///
/// The 16-byte input occupies the nonce/counter words of the `ChaCha` state.
/// Output is words 0-3 and 12-15 after 20 rounds, without the feed-forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HChaCha20;

impl Prf for HChaCha20 {
    fn derive_key(
        &self,
        output: &mut [u8; PRF_OUTPUT_SIZE],
        key: &[u8; PRF_KEY_SIZE],
        input: &[u8; PRF_INPUT_SIZE],
    ) {
        let mut derived =
            hchacha::<U10>(GenericArray::from_slice(key), GenericArray::from_slice(input));
        output.copy_from_slice(&derived);
        derived.as_mut_slice().zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode<const N: usize>(hex_str: &str) -> [u8; N] {
        let bytes = hex::decode(hex_str).unwrap();
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        out
    }

    // draft-irtf-cfrg-xchacha section 2.2.1
    #[test]
    fn hchacha20_test_vector() {
        let key = decode::<32>("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f");
        let input = decode::<16>("000000090000004a0000000031415927");
        let expected = decode::<32>(
            "82413b4227b27bfed30e42508a877d73a0f9e4d58a74a853c12ec41326d3ecdc",
        );

        let mut output = [0u8; PRF_OUTPUT_SIZE];
        HChaCha20.derive_key(&mut output, &key, &input);

        assert_eq!(output, expected);
    }

    #[test]
    fn derive_is_deterministic() {
        let key = [7u8; PRF_KEY_SIZE];
        let input = [1u8; PRF_INPUT_SIZE];

        let mut first = [0u8; PRF_OUTPUT_SIZE];
        let mut second = [0u8; PRF_OUTPUT_SIZE];
        HChaCha20.derive_key(&mut first, &key, &input);
        HChaCha20.derive_key(&mut second, &key, &input);

        assert_eq!(first, second, "same inputs must produce same output");
    }

    #[test]
    fn different_inputs_produce_different_outputs() {
        let key = [7u8; PRF_KEY_SIZE];
        let mut input = [0u8; PRF_INPUT_SIZE];

        let mut first = [0u8; PRF_OUTPUT_SIZE];
        HChaCha20.derive_key(&mut first, &key, &input);
        input[PRF_INPUT_SIZE - 1] = 1;
        let mut second = [0u8; PRF_OUTPUT_SIZE];
        HChaCha20.derive_key(&mut second, &key, &input);

        assert_ne!(first, second);
    }

    fn derive_with<P: Prf>(
        prf: P,
        output: &mut [u8; PRF_OUTPUT_SIZE],
        key: &[u8; PRF_KEY_SIZE],
        input: &[u8; PRF_INPUT_SIZE],
    ) {
        prf.derive_key(output, key, input);
    }

    #[test]
    fn borrowed_prf_matches_owned() {
        let key = [3u8; PRF_KEY_SIZE];
        let input = [9u8; PRF_INPUT_SIZE];
        let prf = HChaCha20;

        let mut owned = [0u8; PRF_OUTPUT_SIZE];
        let mut borrowed = [0u8; PRF_OUTPUT_SIZE];
        derive_with(prf, &mut owned, &key, &input);
        derive_with(&prf, &mut borrowed, &key, &input);

        assert_eq!(owned, borrowed);
    }
}
