//! Master password setup and verification.
//!
//! The master password itself is never stored — only a salted PBKDF2 hash
//! of it, kept as line 0 of the store file. The record is created once at
//! `init` and is immutable afterwards (there is no rotation feature).

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::crypto::kdf::{derive_key, generate_salt};
use crate::errors::{PassKeepError, Result};

/// The salt + hash pair that gates access to the store.
#[derive(Debug, Clone)]
pub struct MasterRecord {
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

impl MasterRecord {
    /// Create a fresh master record from a new password and its
    /// confirmation.
    ///
    /// Fails with `PasswordMismatch` if the two differ. Generates a fresh
    /// random salt; the salt is never shared with any entry field.
    pub fn initialize(password: &[u8], confirmation: &[u8]) -> Result<Self> {
        if password.ct_eq(confirmation).unwrap_u8() == 0 {
            return Err(PassKeepError::PasswordMismatch);
        }

        let salt = generate_salt();
        let hash = derive_key(password, &salt)?;

        Ok(Self {
            salt: salt.to_vec(),
            hash: hash.to_vec(),
        })
    }

    /// Check an entered password against this record.
    ///
    /// Recomputes the hash with the stored salt and compares in constant
    /// time. On mismatch the error carries no detail about where the
    /// comparison failed.
    pub fn verify(&self, password: &[u8]) -> Result<()> {
        let mut computed = derive_key(password, &self.salt)?;
        let matches: bool = computed.as_slice().ct_eq(self.hash.as_slice()).into();
        computed.zeroize();

        if matches {
            Ok(())
        } else {
            Err(PassKeepError::IncorrectMasterPassword)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_rejects_mismatched_confirmation() {
        let err = MasterRecord::initialize(b"hunter2", b"hunter3").unwrap_err();
        assert!(matches!(err, PassKeepError::PasswordMismatch));
    }

    #[test]
    fn verify_accepts_correct_password() {
        let record = MasterRecord::initialize(b"hunter2", b"hunter2").unwrap();
        assert!(record.verify(b"hunter2").is_ok());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let record = MasterRecord::initialize(b"hunter2", b"hunter2").unwrap();
        let err = record.verify(b"hunter3").unwrap_err();
        assert!(matches!(err, PassKeepError::IncorrectMasterPassword));
    }

    #[test]
    fn two_records_never_share_a_salt() {
        let a = MasterRecord::initialize(b"same", b"same").unwrap();
        let b = MasterRecord::initialize(b"same", b"same").unwrap();
        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }
}
