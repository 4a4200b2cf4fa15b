//! Heuristic password strength scoring

use serde::{Deserialize, Serialize};

/// Highest score [`calculate_strength`] returns
pub const MAX_STRENGTH: u8 = 5;

/// Score a password from 0 to [`MAX_STRENGTH`].
///
/// One point each for length >= 8, >= 12 and >= 16 (cumulative), mixed
/// ASCII case, an ASCII digit, and any character outside `[A-Za-z0-9]`.
/// The sum is capped at 5. Length counts UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
///
/// # Example
/// ```
/// use passcrypt::calculate_strength;
///
/// assert_eq!(calculate_strength(""), 0);
/// assert_eq!(calculate_strength("abc"), 0);
/// assert_eq!(calculate_strength("Abcdefgh1!"), 4);
/// ```
pub fn calculate_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.encode_utf16().count();
    let mut score = 0u8;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if length >= 16 {
        score += 1;
    }

    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    score.min(MAX_STRENGTH)
}

/// Display label for a strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Label for `password`
    pub fn of(password: &str) -> Self {
        Self::from(calculate_strength(password))
    }
}

impl From<u8> for PasswordStrength {
    fn from(score: u8) -> Self {
        match score {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Fair,
            3 => PasswordStrength::Good,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(calculate_strength(""), 0);
    }

    #[test]
    fn test_short_lowercase_scores_zero() {
        assert_eq!(calculate_strength("abc"), 0);
    }

    #[test]
    fn test_short_password_still_earns_class_points() {
        // length < 8 but mixed case, digit and symbol
        assert_eq!(calculate_strength("aB1!"), 3);
    }

    #[test]
    fn test_mixed_ten_chars() {
        assert_eq!(calculate_strength("Abcdefgh1!"), 4);
    }

    #[test]
    fn test_length_thresholds_are_cumulative() {
        assert_eq!(calculate_strength("aaaaaaa"), 0);
        assert_eq!(calculate_strength("aaaaaaaa"), 1);
        assert_eq!(calculate_strength("aaaaaaaaaaaa"), 2);
        assert_eq!(calculate_strength("aaaaaaaaaaaaaaaa"), 3);
        assert_eq!(calculate_strength(&"a".repeat(20)), 3);
    }

    #[test]
    fn test_capped_at_five() {
        // 3 length points + case + digit + symbol = 6
        assert_eq!(calculate_strength("Abcdefghijklmno1!"), MAX_STRENGTH);
    }

    #[test]
    fn test_single_case_gets_no_case_point() {
        assert_eq!(calculate_strength("ABCDEFGH"), 1);
        assert_eq!(calculate_strength("abcdEFGH"), 2);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        // Cyrillic letters are outside [A-Za-z0-9]
        assert_eq!(calculate_strength("пароль"), 1);
        // 8 characters, 16 bytes
        assert_eq!(calculate_strength("парольпа"), 2);
    }

    #[test]
    fn test_astral_characters_count_as_two_units() {
        // 4 emoji, 8 UTF-16 units: length >= 8 plus symbol
        assert_eq!(calculate_strength("😀😀😀😀"), 2);
        // 6 emoji, 12 units
        assert_eq!(calculate_strength(&"😀".repeat(6)), 3);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(PasswordStrength::of(""), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::of("Abcdefgh1!"), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from(5), PasswordStrength::VeryStrong);
        assert_eq!(PasswordStrength::from(200), PasswordStrength::VeryStrong);
        assert!(PasswordStrength::Weak < PasswordStrength::Good);
    }
}
