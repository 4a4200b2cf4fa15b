//! Password-protected blobs
//!
//! A blob is `[salt:16][nonce:12][ciphertext+tag]` with no length prefix,
//! version byte or associated data. The plaintext is the UTF-8 JSON encoding
//! of the caller's value. Salt and nonce are fresh for every call, so the key
//! is fresh too and a nonce is never reused under the same key.

use aes_gcm::aead::OsRng;
use aes_gcm::aead::rand_core::RngCore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use zeroize::Zeroizing;

use super::key::{SALT_SIZE, derive_key};
use crate::error::{CryptoError, Result};

/// Nonce size for AES-GCM (12 bytes = 96 bits)
pub const NONCE_SIZE: usize = 12;

/// Salt plus nonce
pub const HEADER_SIZE: usize = SALT_SIZE + NONCE_SIZE;

/// GCM authentication tag appended to the ciphertext
pub const TAG_SIZE: usize = 16;

/// Encrypt a JSON-serializable value with a password.
///
/// Two calls with the same value and password never produce the same blob.
///
/// # Errors
/// [`CryptoError::Serialization`] if `value` cannot be encoded as JSON. This is
/// checked before any key derivation runs.
///
/// # Example
/// ```
/// use passcrypt::{decrypt, encrypt};
/// use serde_json::{json, Value};
///
/// let blob = encrypt(&json!({"site": "example.org"}), "hunter2").unwrap();
/// let value: Value = decrypt(&blob, "hunter2").unwrap();
/// assert_eq!(value["site"], "example.org");
/// ```
pub fn encrypt<T: Serialize + ?Sized>(value: &T, password: &str) -> Result<Vec<u8>> {
    let plaintext = serde_json::to_vec(value).map_err(|e| {
        tracing::debug!(error = %e, "value is not representable as JSON");
        CryptoError::from(e)
    })?;
    let plaintext = Zeroizing::new(plaintext);

    let mut salt = [0u8; SALT_SIZE];
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut salt);
    OsRng.fill_bytes(&mut nonce);

    let blob = seal_blob(&plaintext, password, &salt, &nonce)?;
    tracing::trace!(blob_len = blob.len(), "encrypted blob");
    Ok(blob)
}

/// Decrypt a blob produced by [`encrypt`].
///
/// # Errors
/// [`CryptoError::DecryptionFailed`] for every failure: short blob, wrong
/// password, tampering, or a payload that is not JSON of type `T`. The
/// causes are deliberately indistinguishable.
pub fn decrypt<T: DeserializeOwned>(blob: &[u8], password: &str) -> Result<T> {
    if blob.len() < HEADER_SIZE {
        tracing::debug!(blob_len = blob.len(), "decryption failed: blob shorter than header");
        return Err(CryptoError::DecryptionFailed);
    }

    let (salt, rest) = blob.split_at(SALT_SIZE);
    let (nonce, ciphertext) = rest.split_at(NONCE_SIZE);
    let salt: &[u8; SALT_SIZE] = salt.try_into().map_err(|_| CryptoError::DecryptionFailed)?;
    let nonce: &[u8; NONCE_SIZE] = nonce.try_into().map_err(|_| CryptoError::DecryptionFailed)?;

    let plaintext = derive_key(password, salt)
        .open(nonce, ciphertext)
        .map_err(|_| {
            tracing::debug!(blob_len = blob.len(), "decryption failed: authentication failed");
            CryptoError::DecryptionFailed
        })?;

    serde_json::from_slice(&plaintext).map_err(|_| {
        tracing::debug!(blob_len = blob.len(), "decryption failed: payload is not valid UTF-8 JSON");
        CryptoError::DecryptionFailed
    })
}

/// Check whether `password` opens `blob`.
///
/// True exactly when `decrypt::<serde_json::Value>` would succeed; never
/// returns an error. Typed callers use [`verify_password_as`].
pub fn verify_password(blob: &[u8], password: &str) -> bool {
    verify_password_as::<serde_json::Value>(blob, password)
}

/// Check whether `password` opens `blob` and the payload decodes as `T`.
///
/// True exactly when `decrypt::<T>` would succeed.
pub fn verify_password_as<T: DeserializeOwned>(blob: &[u8], password: &str) -> bool {
    decrypt::<T>(blob, password).is_ok()
}

/// Lay out a blob from already-chosen salt and nonce.
pub(crate) fn seal_blob(
    plaintext: &[u8],
    password: &str,
    salt: &[u8; SALT_SIZE],
    nonce: &[u8; NONCE_SIZE],
) -> Result<Vec<u8>> {
    let ciphertext = derive_key(password, salt)
        .seal(nonce, plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut blob = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    blob.extend_from_slice(salt);
    blob.extend_from_slice(nonce);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}
