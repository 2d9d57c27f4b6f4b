use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassKeep.
#[derive(Debug, Error)]
pub enum PassKeepError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Failed to decrypt — wrong master password or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Store errors ---
    #[error("Password store not found at {0}")]
    StoreNotFound(PathBuf),

    #[error("Password store already exists at {0}")]
    StoreAlreadyExists(PathBuf),

    #[error("Invalid store format: {0}")]
    InvalidStoreFormat(String),

    #[error("Entry '{0}' not found")]
    EntryNotFound(String),

    #[error("Entry '{0}' already exists")]
    DuplicateEntry(String),

    // --- Master password errors ---
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("The master password is incorrect")]
    IncorrectMasterPassword,

    // --- Durable write errors ---
    //
    // The first phase (rotating the old file to the backup path) leaves the
    // store untouched when it fails. The second phase leaves only the backup
    // on disk, so its message must carry the recovery step.
    #[error("Failed to update the password store — the existing file is untouched: {0}")]
    WriteAborted(std::io::Error),

    #[error(
        "Failed to write {}: {} — rename '{}' to '{}' to restore the store",
        .primary.display(),
        .source,
        .backup.display(),
        .primary.display()
    )]
    WriteFailed {
        primary: PathBuf,
        backup: PathBuf,
        source: std::io::Error,
    },

    // --- Generator errors ---
    #[error("Invalid password length: {0} (must be at least 1)")]
    InvalidSecretLength(usize),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- Clipboard errors ---
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassKeep results.
pub type Result<T> = std::result::Result<T, PassKeepError>;
