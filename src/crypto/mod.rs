//! Cryptographic operations for passcrypt
//!
//! PBKDF2-HMAC-SHA256 key derivation feeding AES-256-GCM, packed into a single
//! `[salt][nonce][ciphertext+tag]` blob, plus password generation and scoring.

mod blob;
mod key;
pub mod password;
pub mod strength;

pub use blob::{
    decrypt, encrypt, verify_password, verify_password_as, HEADER_SIZE, NONCE_SIZE, TAG_SIZE,
};
pub use key::{derive_key, BlobKey, KEY_LENGTH, PBKDF2_ROUNDS, SALT_SIZE};
pub use password::{generate_password, PasswordOptions};
pub use strength::{calculate_strength, PasswordStrength};
