//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The same function serves two distinct purposes, always with distinct
//! salts: deriving the master verification hash stored on line 0 of the
//! store file, and deriving the per-field symmetric keys that encrypt an
//! entry's description and secret.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::errors::{PassKeepError, Result};

/// Length of a salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
///
/// Fixed rather than configurable: the store format does not record the
/// iteration count, so every derivation must use the same value or old
/// stores become unreadable.
const ITERATIONS: u32 = 65_536;

/// Derive a 32-byte key from a password and salt.
///
/// Deterministic: the same password + salt always produces the same key.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    if salt.is_empty() {
        return Err(PassKeepError::KeyDerivationFailed(
            "salt must not be empty".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password, salt, ITERATIONS, &mut key);
    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
///
/// Every derivation gets a fresh salt; salts are never shared between
/// entries, between the two fields of one entry, or with the master record.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}
