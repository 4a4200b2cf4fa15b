//! Password generation functionality

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, Result};

pub const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Default generated password length
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Options for password generation
///
/// Deserializing a partial object keeps the default for every field that
/// is missing, so `{"length": 24}` still enables all four classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    /// Password length
    pub length: usize,
    /// Include uppercase letters (A-Z)
    #[serde(alias = "includeUppercase")]
    pub uppercase: bool,
    /// Include lowercase letters (a-z)
    #[serde(alias = "includeLowercase")]
    pub lowercase: bool,
    /// Include digits (0-9)
    #[serde(alias = "includeDigits", alias = "numbers")]
    pub digits: bool,
    /// Include special symbols (!@#$%...)
    #[serde(alias = "includeSymbols")]
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordOptions {
    /// Set the password length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Enable or disable uppercase letters
    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.uppercase = enabled;
        self
    }

    /// Enable or disable lowercase letters
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    /// Enable or disable digits
    pub fn with_digits(mut self, enabled: bool) -> Self {
        self.digits = enabled;
        self
    }

    /// Enable or disable special symbols
    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.symbols = enabled;
        self
    }

    /// Characters a password may be drawn from, in class order
    /// uppercase, lowercase, digits, symbols.
    pub fn charset(&self) -> String {
        let mut charset = String::new();
        if self.uppercase {
            charset.push_str(UPPER_LETTERS);
        }
        if self.lowercase {
            charset.push_str(LOWER_LETTERS);
        }
        if self.digits {
            charset.push_str(DIGITS);
        }
        if self.symbols {
            charset.push_str(SPECIAL_SYMBOLS);
        }
        charset
    }
}

/// Generate a random password with the specified options.
///
/// Each position takes one random `u32` reduced modulo the charset size.
/// That reduction is slightly biased toward the first characters whenever
/// the charset size does not divide 2^32 (at most about 2e-8 relative).
///
/// # Errors
/// [`CryptoError::EmptyCharset`] when every character class is disabled.
///
/// # Example
/// ```
/// use passcrypt::crypto::password::{generate_password, PasswordOptions};
///
/// let options = PasswordOptions::default().with_length(20).with_symbols(false);
/// let password = generate_password(&options).unwrap();
/// assert_eq!(password.len(), 20);
/// assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_password(options: &PasswordOptions) -> Result<String> {
    let charset = options.charset();
    if charset.is_empty() {
        return Err(CryptoError::EmptyCharset);
    }

    let chars = charset.as_bytes();
    let mut rng = rand::rng();
    let mut password = String::with_capacity(options.length);

    for _ in 0..options.length {
        let idx = rng.next_u32() as usize % chars.len();
        password.push(chars[idx] as char);
    }

    Ok(password)
}
