//! High-level store operations used by CLI commands.
//!
//! A `Store` owns the on-disk file and an in-memory copy of its parsed
//! records. The file is modeled as an ordered sequence of records that is
//! rebuilt and rewritten wholesale on every mutation — there are no
//! partial in-place updates. Persistence goes through the durable-write
//! protocol in `save`, which rotates the previous file to a `_backup`
//! sibling before writing the new content.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use zeroize::{Zeroize, Zeroizing};

use crate::crypto::cipher::{decrypt, encrypt};
use crate::crypto::kdf::{derive_key, generate_salt};
use crate::errors::{PassKeepError, Result};

use super::master::MasterRecord;
use super::record::{self, EncryptedField, Entry};

/// Suffix appended to the store file name for the backup file.
const BACKUP_SUFFIX: &str = "_backup";

/// Decrypted contents of one entry, returned by `get_entry`.
///
/// Both buffers are wiped from memory on drop.
#[derive(Debug)]
pub struct DecryptedEntry {
    pub description: Zeroizing<String>,
    pub secret: Zeroizing<String>,
}

/// The main store handle. Create one with `Store::init` or `Store::open`,
/// then use its methods to manage entries.
#[derive(Debug)]
pub struct Store {
    /// Path to the store file on disk.
    path: PathBuf,

    /// The master salt + hash record from line 0.
    master: MasterRecord,

    /// Parsed entries, in file order.
    entries: Vec<Entry>,
}

impl Store {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a brand-new store file at `path`.
    ///
    /// Fails with `StoreAlreadyExists` if the file is already present.
    /// The file is created with `create_new`, so the existence check and
    /// the creation are a single atomic step — two concurrent `init`
    /// invocations cannot both succeed.
    pub fn init(path: &Path, password: &[u8], confirmation: &[u8]) -> Result<Self> {
        let master = MasterRecord::initialize(password, confirmation)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::AlreadyExists {
                    PassKeepError::StoreAlreadyExists(path.to_path_buf())
                } else {
                    PassKeepError::Io(e)
                }
            })?;

        file.write_all(record::encode_master(&master).as_bytes())?;
        file.write_all(b"\n")?;

        Ok(Self {
            path: path.to_path_buf(),
            master,
            entries: Vec::new(),
        })
    }

    /// Open and parse an existing store file.
    ///
    /// No password is required to open — the master record and the entry
    /// names are readable without one. Decryption and mutation are gated
    /// separately by `verify_master`.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PassKeepError::StoreNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let mut lines = content.lines().filter(|l| !l.is_empty());

        let master_line = lines
            .next()
            .ok_or_else(|| PassKeepError::InvalidStoreFormat("store file is empty".into()))?;
        let master = record::parse_master(master_line)?;

        let entries = lines
            .enumerate()
            .map(|(i, line)| record::parse_entry(line, i + 2))
            .collect::<Result<Vec<Entry>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            master,
            entries,
        })
    }

    // ------------------------------------------------------------------
    // Master password
    // ------------------------------------------------------------------

    /// Check an entered master password against the stored record.
    pub fn verify_master(&self, password: &[u8]) -> Result<()> {
        self.master.verify(password)
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Returns `true` if an entry with this exact name exists.
    ///
    /// Case-sensitive; no decryption is performed.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    /// Add a new entry and persist the store.
    ///
    /// The description and the secret each get an independently generated
    /// salt and IV, and a key derived from `master_password` + that salt.
    /// Per-field keys are wiped immediately after use.
    pub fn add_entry(
        &mut self,
        name: &str,
        description: &str,
        secret: &str,
        master_password: &[u8],
    ) -> Result<()> {
        if self.contains(name) {
            return Err(PassKeepError::DuplicateEntry(name.to_string()));
        }

        let description = seal_field(master_password, description.as_bytes())?;
        let secret = seal_field(master_password, secret.as_bytes())?;

        self.entries.push(Entry {
            name: name.to_string(),
            description,
            secret,
        });

        self.save()
    }

    /// Decrypt and return the description and secret of an entry.
    ///
    /// Fails with `EntryNotFound` if the name is absent and with
    /// `DecryptionFailed` if either field fails to decrypt — which field
    /// failed is never reported.
    pub fn get_entry(&self, name: &str, master_password: &[u8]) -> Result<DecryptedEntry> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| PassKeepError::EntryNotFound(name.to_string()))?;

        let description = open_field(master_password, &entry.description)?;
        let secret = open_field(master_password, &entry.secret)?;

        Ok(DecryptedEntry {
            description,
            secret,
        })
    }

    /// Remove an entry and persist the store.
    ///
    /// The master record is always retained at line 0.
    pub fn remove_entry(&mut self, name: &str) -> Result<()> {
        let before = self.entries.len();
        self.entries.retain(|e| e.name != name);

        if self.entries.len() == before {
            return Err(PassKeepError::EntryNotFound(name.to_string()));
        }

        self.save()
    }

    /// Return the names of all entries containing `keyword` as a
    /// substring, in file order.
    ///
    /// An empty keyword matches everything, so `find("")` lists the whole
    /// store. No decryption and no master password involved.
    pub fn find(&self, keyword: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.name.contains(keyword))
            .map(|e| e.name.clone())
            .collect()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of entries in the store.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize all records back to the line format.
    fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.entries.len() + 1);
        lines.push(record::encode_master(&self.master));
        lines.extend(self.entries.iter().map(record::encode_entry));

        let mut content = lines.join("\n");
        content.push('\n');
        content
    }

    /// Write the full store content to disk via the durable-write
    /// protocol:
    ///
    /// 1. Delete any stale backup file.
    /// 2. Rename the current store file to `<name>_backup`.
    /// 3. Write the new content to the primary path.
    ///
    /// If step 1 or 2 fails the mutation is aborted and the current file
    /// is left untouched (`WriteAborted`). If step 3 fails, only the
    /// backup remains on disk and the error names it as the recovery
    /// path (`WriteFailed`); it is not restored automatically.
    fn save(&self) -> Result<()> {
        let backup = backup_path(&self.path);

        if backup.exists() {
            fs::remove_file(&backup).map_err(PassKeepError::WriteAborted)?;
        }
        fs::rename(&self.path, &backup).map_err(PassKeepError::WriteAborted)?;

        fs::write(&self.path, self.render()).map_err(|source| PassKeepError::WriteFailed {
            primary: self.path.clone(),
            backup: backup.clone(),
            source,
        })
    }
}

/// Compute the backup path for a store file: `<file>_backup` in the same
/// directory.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Encrypt one field under a freshly salted key derived from the master
/// password. The derived key is wiped before returning.
fn seal_field(master_password: &[u8], plaintext: &[u8]) -> Result<EncryptedField> {
    let salt = generate_salt();
    let mut key = derive_key(master_password, &salt)?;

    let result = encrypt(&key, plaintext);
    key.zeroize();

    let (iv, ciphertext) = result?;
    Ok(EncryptedField {
        salt: salt.to_vec(),
        iv: iv.to_vec(),
        ciphertext,
    })
}

/// Decrypt one field with a key re-derived from the master password and
/// the field's own salt. The derived key is wiped on every exit path.
fn open_field(master_password: &[u8], field: &EncryptedField) -> Result<Zeroizing<String>> {
    let mut key = derive_key(master_password, &field.salt)?;

    let result = decrypt(&key, &field.iv, &field.ciphertext);
    key.zeroize();

    let plaintext = result?;

    // from_utf8 takes ownership, so no plaintext copy is left behind.
    // On error, wipe the bytes inside the error before discarding it.
    String::from_utf8(plaintext)
        .map(Zeroizing::new)
        .map_err(|e| {
            let mut bad_bytes = e.into_bytes();
            bad_bytes.zeroize();
            PassKeepError::DecryptionFailed
        })
}
