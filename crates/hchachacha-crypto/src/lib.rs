//! `HChaChaCha` Block Ciphers
//!
//! 128-bit block ciphers built by plugging a wide keyed PRF (`HChaCha20`) into
//! classical cipher network shapes. Pure functions over caller buffers with
//! no state shared between calls.
//!
//! # Variants
//!
//! - [`HChaChaCha`]: balanced Feistel network, 8 rounds
//! - [`HChaChaCha128l`]: Lai-Massey network with a linear orthomorphism, 6
//!   rounds
//!
//! Both take a 256-bit key and permute a single 16-byte block. There is no
//! mode of operation, padding or authentication here.
//!
//! # Key Lifecycle
//!
//! Every call derives its own key material from the master key and destroys
//! it before returning:
//!
//! ```text
//! Master Key (32 bytes)
//!        │
//!        ▼ PRF(key, counter = 1)
//! Whitening Keys (pre: 16 bytes, post: 16 bytes)
//!        │
//!        ▼ PRF(key, counter = 2..=N+1)
//! Round Keys (32 bytes each)
//!        │
//!        ▼ PRF(round key, padded half)
//! Round Mixing Values → Ciphertext
//! ```
//!
//! Round keys, whitening keys, PRF scratch output and the padded half-block
//! buffers are all zeroized on drop, so every exit path erases them.
//!
//! # Example
//!
//! ```
//! use hchachacha_crypto::{BlockCipher, HChaChaCha};
//!
//! let cipher = HChaChaCha::new();
//! let key = [0x42; 32];
//! let plaintext = [0u8; 16];
//!
//! let mut ciphertext = [0u8; 16];
//! cipher.encrypt(&mut ciphertext, &plaintext, &key).unwrap();
//!
//! let mut recovered = [0u8; 16];
//! cipher.decrypt(&mut recovered, &ciphertext, &key).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod block;
pub mod cipher;
pub mod error;
pub mod feistel;
pub mod lai_massey;
pub mod prf;
pub mod schedule;

pub use block::{BLOCK_SIZE, HALF_SIZE, KEY_SIZE};
pub use cipher::BlockCipher;
pub use error::{Buffer, CipherError};
pub use feistel::{Feistel, HChaChaCha};
pub use lai_massey::{HChaChaCha128l, LaiMassey};
pub use prf::{HChaCha20, PRF_INPUT_SIZE, PRF_KEY_SIZE, PRF_OUTPUT_SIZE, Prf};
pub use schedule::{KeySchedule, MAX_ROUNDS};
