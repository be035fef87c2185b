//! Error types for the command-line front end

use hchachacha_crypto::CipherError;
use thiserror::Error;

/// Errors from CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// Key or block argument is not valid hex
    #[error("invalid hex in {argument}: {source}")]
    InvalidHex {
        /// Which argument failed to decode
        argument: &'static str,
        /// Decoder error
        source: hex::FromHexError,
    },

    /// Decoded buffer rejected by the cipher
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Built-in known-answer vectors did not reproduce
    #[error("{failed} of {total} known-answer vectors failed")]
    VectorMismatch {
        /// Number of failing vectors
        failed: usize,
        /// Number of vectors checked
        total: usize,
    },

    /// Writing output failed
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use hchachacha_crypto::Buffer;

    use super::*;

    #[test]
    fn cipher_error_is_transparent() {
        let err = CliError::from(CipherError::SizeMismatch {
            buffer: Buffer::Plaintext,
            expected: 16,
            actual: 4,
        });
        assert_eq!(err.to_string(), "plaintext size mismatch: expected 16 bytes, got 4");
    }

    #[test]
    fn vector_mismatch_display() {
        let err = CliError::VectorMismatch { failed: 1, total: 6 };
        assert_eq!(err.to_string(), "1 of 6 known-answer vectors failed");
    }
}
