//! Error types for block cipher operations

use std::fmt;

use thiserror::Error;

/// Caller-supplied buffer named in a size error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Buffer {
    /// Plaintext block (input to encrypt, output of decrypt)
    Plaintext,
    /// Ciphertext block (output of encrypt, input to decrypt)
    Ciphertext,
    /// Master key
    Key,
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plaintext => "plaintext",
            Self::Ciphertext => "ciphertext",
            Self::Key => "key",
        };
        f.write_str(name)
    }
}

/// Errors from block cipher operations
///
/// Every error is a caller input shape problem detected before any key
/// material is derived. The PRF itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Buffer length differs from the fixed size required by the cipher
    #[error("{buffer} size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Which buffer was rejected
        buffer: Buffer,
        /// Required length in bytes
        expected: usize,
        /// Length the caller supplied
        actual: usize,
    },
}

impl CipherError {
    /// The buffer this error refers to.
    pub fn buffer(&self) -> Buffer {
        match self {
            Self::SizeMismatch { buffer, .. } => *buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CipherError::SizeMismatch { buffer: Buffer::Key, expected: 32, actual: 31 };
        assert_eq!(err.to_string(), "key size mismatch: expected 32 bytes, got 31");
    }

    #[test]
    fn buffer_accessor() {
        let err = CipherError::SizeMismatch { buffer: Buffer::Ciphertext, expected: 16, actual: 0 };
        assert_eq!(err.buffer(), Buffer::Ciphertext);
    }
}
