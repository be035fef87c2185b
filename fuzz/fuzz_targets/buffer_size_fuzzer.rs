//! Fuzz target for buffer size validation
//!
//! Feeds arbitrary-length buffers to the slice API.
//!
//! # Invariants
//!
//! - Calls succeed exactly when every buffer has its fixed size
//! - Rejected calls never write to the output buffer
//! - Never panics

#![no_main]

use arbitrary::Arbitrary;
use hchachacha_crypto::{BlockCipher, HChaChaCha, HChaChaCha128l, BLOCK_SIZE, KEY_SIZE};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct SizeScenario {
    output_len: u8,
    input: Vec<u8>,
    key: Vec<u8>,
    decrypt: bool,
    lai_massey: bool,
}

const FILL: u8 = 0xA5;

fuzz_target!(|scenario: SizeScenario| {
    let mut output = vec![FILL; usize::from(scenario.output_len)];
    let valid = output.len() == BLOCK_SIZE
        && scenario.input.len() == BLOCK_SIZE
        && scenario.key.len() == KEY_SIZE;

    let result = match (scenario.lai_massey, scenario.decrypt) {
        (false, false) => HChaChaCha::new().encrypt(&mut output, &scenario.input, &scenario.key),
        (false, true) => HChaChaCha::new().decrypt(&mut output, &scenario.input, &scenario.key),
        (true, false) => HChaChaCha128l::new().encrypt(&mut output, &scenario.input, &scenario.key),
        (true, true) => HChaChaCha128l::new().decrypt(&mut output, &scenario.input, &scenario.key),
    };

    // INVARIANT 1: Success iff all sizes are exact
    assert_eq!(result.is_ok(), valid, "validation must match size rules");

    // INVARIANT 2: Rejected calls leave output untouched
    if !valid {
        assert!(output.iter().all(|&b| b == FILL), "rejected call must not write output");
    }
});
