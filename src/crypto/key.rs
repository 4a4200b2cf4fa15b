//! Key derivation for AES-256-GCM
//!
//! PBKDF2-HMAC-SHA256 over the raw UTF-8 bytes of the password, 100,000 rounds,
//! producing 32 bytes of key material. The material only ever lives inside a
//! [`BlobKey`], which can seal and open blobs for this crate and nothing else.

use std::fmt;

use aes_gcm::aead::{self, Aead};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use sha2::Sha256;
use zeroize::Zeroizing;

use super::blob::NONCE_SIZE;

/// Key length for AES-256 (32 bytes = 256 bits)
pub const KEY_LENGTH: usize = 32;

/// Salt length stored at the start of every blob
pub const SALT_SIZE: usize = 16;

/// PBKDF2 iteration count. Changing it makes every existing blob unreadable.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// Opaque AES-256-GCM key derived from a password and salt.
///
/// The raw key bytes are wiped once the cipher is built and cannot be
/// read back out.
pub struct BlobKey {
    cipher: Aes256Gcm,
}

impl BlobKey {
    pub(crate) fn seal(
        &self,
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> std::result::Result<Vec<u8>, aead::Error> {
        self.cipher.encrypt(Nonce::from_slice(nonce), plaintext)
    }

    pub(crate) fn open(
        &self,
        nonce: &[u8; NONCE_SIZE],
        ciphertext: &[u8],
    ) -> std::result::Result<Zeroizing<Vec<u8>>, aead::Error> {
        self.cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map(Zeroizing::new)
    }
}

impl fmt::Debug for BlobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BlobKey([REDACTED])")
    }
}

/// Derive the blob key for `password` and `salt`.
///
/// Deterministic: the same pair always yields the same key. An empty
/// password is accepted.
///
/// # Example
/// ```
/// use passcrypt::crypto::{derive_key, SALT_SIZE};
///
/// let key = derive_key("correct horse", &[7u8; SALT_SIZE]);
/// assert_eq!(format!("{:?}", key), "BlobKey([REDACTED])");
/// ```
pub fn derive_key(password: &str, salt: &[u8; SALT_SIZE]) -> BlobKey {
    let material = derive_key_material(password.as_bytes(), salt, PBKDF2_ROUNDS);
    BlobKey {
        cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(material.as_slice())),
    }
}

fn derive_key_material(password: &[u8], salt: &[u8], rounds: u32) -> Zeroizing<[u8; KEY_LENGTH]> {
    let mut material = Zeroizing::new([0u8; KEY_LENGTH]);
    pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, rounds, material.as_mut_slice());
    material
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PBKDF2-HMAC-SHA256 vector from RFC 7914 section 11 (first 32 bytes)
    #[test]
    fn test_pbkdf2_rfc7914_vector() {
        let expected: [u8; KEY_LENGTH] = [
            0x55, 0xac, 0x04, 0x6e, 0x56, 0xe3, 0x08, 0x9f,
            0xec, 0x16, 0x91, 0xc2, 0x25, 0x44, 0xb6, 0x05,
            0xf9, 0x41, 0x85, 0x21, 0x6d, 0xde, 0x04, 0x65,
            0xe6, 0x8b, 0x9d, 0x57, 0xc2, 0x0d, 0xac, 0xbc,
        ];

        let material = derive_key_material(b"passwd", b"salt", 1);
        assert_eq!(*material, expected);
    }

    #[test]
    fn test_material_depends_on_every_input() {
        let base = derive_key_material(b"password", &[1u8; SALT_SIZE], 2);
        assert_ne!(*base, *derive_key_material(b"Password", &[1u8; SALT_SIZE], 2));
        assert_ne!(*base, *derive_key_material(b"password", &[2u8; SALT_SIZE], 2));
        assert_ne!(*base, *derive_key_material(b"password", &[1u8; SALT_SIZE], 3));
    }

    #[test]
    fn test_derive_key_deterministic() {
        let salt = [9u8; SALT_SIZE];
        let nonce = [3u8; NONCE_SIZE];

        let k1 = derive_key("Sun001!", &salt);
        let k2 = derive_key("Sun001!", &salt);

        let sealed = k1.seal(&nonce, b"payload").unwrap();
        assert_eq!(sealed, k2.seal(&nonce, b"payload").unwrap());
        assert_eq!(k2.open(&nonce, &sealed).unwrap().as_slice(), b"payload");
    }

    #[test]
    fn test_derive_key_empty_password() {
        let salt = [0u8; SALT_SIZE];
        let nonce = [0u8; NONCE_SIZE];

        let key = derive_key("", &salt);
        let sealed = key.seal(&nonce, b"{}").unwrap();
        assert!(derive_key("x", &salt).open(&nonce, &sealed).is_err());
        assert_eq!(key.open(&nonce, &sealed).unwrap().as_slice(), b"{}");
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = derive_key("secret", &[0u8; SALT_SIZE]);
        let shown = format!("{:?}", key);
        assert!(!shown.contains("secret"));
        assert!(shown.contains("REDACTED"));
    }
}
