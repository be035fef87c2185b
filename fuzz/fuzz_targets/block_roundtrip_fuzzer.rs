//! Fuzz target for block encryption and decryption
//!
//! Runs arbitrary blocks and keys through both networks.
//!
//! # Strategy
//!
//! - Arbitrary 16-byte blocks and 32-byte keys
//! - Both published variants plus non-default round counts
//! - Single-bit key and block perturbations
//!
//! # Invariants
//!
//! - decrypt(encrypt(p)) == p and encrypt(decrypt(c)) == c
//! - Encryption is deterministic
//! - Perturbing the key changes the ciphertext
//! - Typed and slice APIs agree

#![no_main]

use arbitrary::Arbitrary;
use hchachacha_crypto::{
    BlockCipher, Feistel, HChaCha20, HChaChaCha, HChaChaCha128l, LaiMassey, BLOCK_SIZE, KEY_SIZE,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct BlockScenario {
    block: [u8; BLOCK_SIZE],
    key: [u8; KEY_SIZE],
    variant: Variant,
    /// Bit of the key to flip for the divergence check
    key_bit: u8,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Variant {
    Feistel,
    LaiMassey,
    ShortFeistel,
    LongLaiMassey,
}

fn check<C: BlockCipher>(cipher: &C, scenario: &BlockScenario) {
    let block = &scenario.block;
    let key = &scenario.key;

    // INVARIANT 1: Round-trip in both directions
    let ciphertext = cipher.encrypt_block(block, key);
    assert_eq!(&cipher.decrypt_block(&ciphertext, key), block, "encrypt then decrypt");
    let plaintext = cipher.decrypt_block(block, key);
    assert_eq!(&cipher.encrypt_block(&plaintext, key), block, "decrypt then encrypt");

    // INVARIANT 2: Determinism
    assert_eq!(cipher.encrypt_block(block, key), ciphertext, "encryption must be deterministic");

    // INVARIANT 3: Slice API matches typed API
    let mut sliced = [0u8; BLOCK_SIZE];
    assert!(cipher.encrypt(&mut sliced, block, key).is_ok());
    assert_eq!(sliced, ciphertext, "slice and typed encrypt must agree");

    // INVARIANT 4: A different key gives a different permutation
    let mut other_key = *key;
    let bit = usize::from(scenario.key_bit);
    other_key[bit / 8] ^= 1 << (bit % 8);
    assert_ne!(
        cipher.encrypt_block(block, &other_key),
        ciphertext,
        "key change must change ciphertext"
    );
}

fuzz_target!(|scenario: BlockScenario| {
    match scenario.variant {
        Variant::Feistel => check(&HChaChaCha::new(), &scenario),
        Variant::LaiMassey => check(&HChaChaCha128l::new(), &scenario),
        Variant::ShortFeistel => check(&Feistel::<HChaCha20, 2>::new(), &scenario),
        Variant::LongLaiMassey => check(&LaiMassey::<HChaCha20, 12>::new(), &scenario),
    }
});
