//! Error types for passcrypt

use thiserror::Error;

/// Main error type for encryption and password operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Value could not be represented as JSON; raised before any key derivation
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// AEAD primitive rejected the plaintext
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Wrong password, truncated blob, tampered ciphertext or unparsable payload.
    /// The cause is never exposed to the caller.
    #[error("Decryption failed: invalid password or corrupted data")]
    DecryptionFailed,

    /// Every character class was disabled in the password options
    #[error("At least one character type must be selected")]
    EmptyCharset,
}

impl From<serde_json::Error> for CryptoError {
    fn from(err: serde_json::Error) -> Self {
        CryptoError::Serialization(err.to_string())
    }
}

/// Result type alias for passcrypt operations
pub type Result<T> = std::result::Result<T, CryptoError>;
