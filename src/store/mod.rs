//! Store module — the file-backed credential store.
//!
//! This module provides:
//! - The pipe-delimited, base64-encoded line format (`record`)
//! - Master password setup and verification (`master`)
//! - The high-level `Store` with its durable-write protocol (`store`)

pub mod master;
pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use master::MasterRecord;
pub use record::{EncryptedField, Entry};
pub use store::{backup_path, DecryptedEntry, Store};
