//! # passcrypt
//!
//! Password-based encryption of JSON values, with password generation and
//! strength scoring.
//!
//! ## Features
//!
//! - PBKDF2-HMAC-SHA256 key derivation (100,000 rounds, 16-byte random salt)
//! - AES-256-GCM with a fresh 12-byte nonce per call
//! - Self-contained blob format: `[salt:16][nonce:12][ciphertext+tag]`
//! - Uniform decryption failure (wrong password and corruption look the same)
//! - Random password generation from selectable character classes
//! - Heuristic 0-5 strength score
//!
//! ## Example
//!
//! ```
//! use passcrypt::{decrypt, encrypt, generate_password, verify_password, PasswordOptions};
//! use serde_json::json;
//!
//! let password = generate_password(&PasswordOptions::default()).unwrap();
//! let blob = encrypt(&json!({"user": "alice", "pin": 1234}), &password).unwrap();
//!
//! assert!(verify_password(&blob, &password));
//! let value: serde_json::Value = decrypt(&blob, &password).unwrap();
//! assert_eq!(value["pin"], 1234);
//! ```

pub mod crypto;
pub mod error;

// Re-export main types
pub use error::{CryptoError, Result};
pub use crypto::{
    calculate_strength, decrypt, derive_key, encrypt, generate_password, verify_password,
    verify_password_as,
    BlobKey, PasswordOptions, PasswordStrength,
};
pub use crypto::password::DEFAULT_PASSWORD_LENGTH;
pub use crypto::strength::MAX_STRENGTH;
