//! Cryptographic primitives for PassKeep.
//!
//! This module provides:
//! - AES-256-CBC encryption and decryption with PKCS#7 padding (`cipher`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)

pub mod cipher;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use cipher::{decrypt, encrypt};
pub use kdf::{derive_key, generate_salt};
