//! Common surface of the block cipher variants
//!
//! Variants implement the typed, infallible block transforms. The slice-based
//! [`BlockCipher::encrypt`] and [`BlockCipher::decrypt`] validate buffer
//! lengths first and only then reach the typed transforms, so a rejected call
//! derives no key material and writes no output.

use crate::{
    block::{BLOCK_SIZE, KEY_SIZE},
    error::{Buffer, CipherError},
};

/// A keyed permutation of 16-byte blocks under a 32-byte key.
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize = BLOCK_SIZE;

    /// Key size in bytes
    const KEY_SIZE: usize = KEY_SIZE;

    /// Number of PRF rounds
    const ROUNDS: usize;

    /// Encrypt one block.
    fn encrypt_block(
        &self,
        plaintext: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
    ) -> [u8; BLOCK_SIZE];

    /// Decrypt one block.
    fn decrypt_block(
        &self,
        ciphertext: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
    ) -> [u8; BLOCK_SIZE];

    /// Encrypt `plaintext` into `ciphertext` under `key`.
    ///
    /// # Errors
    ///
    /// - `SizeMismatch`: any buffer is not exactly its fixed size. Checked in
    ///   the order ciphertext, plaintext, key. `ciphertext` is left untouched.
    fn encrypt(
        &self,
        ciphertext: &mut [u8],
        plaintext: &[u8],
        key: &[u8],
    ) -> Result<(), CipherError> {
        let ciphertext = block_mut(ciphertext, Buffer::Ciphertext)?;
        let plaintext = block(plaintext, Buffer::Plaintext)?;
        let key = master_key(key)?;

        *ciphertext = self.encrypt_block(plaintext, key);
        Ok(())
    }

    /// Decrypt `ciphertext` into `plaintext` under `key`.
    ///
    /// # Errors
    ///
    /// - `SizeMismatch`: any buffer is not exactly its fixed size. Checked in
    ///   the order plaintext, ciphertext, key. `plaintext` is left untouched.
    fn decrypt(
        &self,
        plaintext: &mut [u8],
        ciphertext: &[u8],
        key: &[u8],
    ) -> Result<(), CipherError> {
        let plaintext = block_mut(plaintext, Buffer::Plaintext)?;
        let ciphertext = block(ciphertext, Buffer::Ciphertext)?;
        let key = master_key(key)?;

        *plaintext = self.decrypt_block(ciphertext, key);
        Ok(())
    }
}

fn size_mismatch(buffer: Buffer, expected: usize, actual: usize) -> CipherError {
    tracing::debug!(%buffer, expected, actual, "rejecting buffer of wrong size");
    CipherError::SizeMismatch { buffer, expected, actual }
}

fn block(bytes: &[u8], buffer: Buffer) -> Result<&[u8; BLOCK_SIZE], CipherError> {
    <&[u8; BLOCK_SIZE]>::try_from(bytes)
        .map_err(|_| size_mismatch(buffer, BLOCK_SIZE, bytes.len()))
}

fn block_mut(bytes: &mut [u8], buffer: Buffer) -> Result<&mut [u8; BLOCK_SIZE], CipherError> {
    let actual = bytes.len();
    <&mut [u8; BLOCK_SIZE]>::try_from(bytes).map_err(|_| size_mismatch(buffer, BLOCK_SIZE, actual))
}

fn master_key(bytes: &[u8]) -> Result<&[u8; KEY_SIZE], CipherError> {
    <&[u8; KEY_SIZE]>::try_from(bytes).map_err(|_| size_mismatch(Buffer::Key, KEY_SIZE, bytes.len()))
}
