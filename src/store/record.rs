//! Line codec for the store file.
//!
//! The store file is plain UTF-8 text, one record per line:
//!
//! ```text
//! masterSalt|masterHash
//! name|desSalt|desIv|desCipher|passSalt|passIv|passCipher
//! name|desSalt|desIv|desCipher|passSalt|passIv|passCipher
//! ```
//!
//! Every field is base64-encoded (standard alphabet), so the `|` delimiter
//! can never appear inside a field. Field order is fixed and positional;
//! no field is optional. The entry name is base64-encoded for framing only
//! — it is not encrypted and not confidential.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::master::MasterRecord;
use crate::errors::{PassKeepError, Result};

/// Field delimiter within a line.
const SEPARATOR: char = '|';

/// Number of fields in an entry line.
const ENTRY_FIELDS: usize = 7;

/// One encrypted field of an entry: its own salt, IV, and ciphertext.
///
/// The description and the secret of an entry each get an independent
/// `EncryptedField` with independently generated salt and IV.
#[derive(Debug, Clone)]
pub struct EncryptedField {
    pub salt: Vec<u8>,
    pub iv: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

/// A single named credential record, as stored on disk.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Decoded entry name (unique, case-sensitive).
    pub name: String,
    pub description: EncryptedField,
    pub secret: EncryptedField,
}

/// Serialize the master record to its line-0 form.
pub fn encode_master(master: &MasterRecord) -> String {
    format!("{}{SEPARATOR}{}", BASE64.encode(&master.salt), BASE64.encode(&master.hash))
}

/// Parse line 0 of the store file into a `MasterRecord`.
pub fn parse_master(line: &str) -> Result<MasterRecord> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() != 2 {
        return Err(PassKeepError::InvalidStoreFormat(format!(
            "master record has {} fields, expected 2",
            fields.len()
        )));
    }

    Ok(MasterRecord {
        salt: decode_field(fields[0], 0)?,
        hash: decode_field(fields[1], 0)?,
    })
}

/// Serialize an entry to its on-disk line form.
pub fn encode_entry(entry: &Entry) -> String {
    let fields = [
        BASE64.encode(entry.name.as_bytes()),
        BASE64.encode(&entry.description.salt),
        BASE64.encode(&entry.description.iv),
        BASE64.encode(&entry.description.ciphertext),
        BASE64.encode(&entry.secret.salt),
        BASE64.encode(&entry.secret.iv),
        BASE64.encode(&entry.secret.ciphertext),
    ];
    fields.join(&SEPARATOR.to_string())
}

/// Parse one entry line. `line_no` is the 1-based line number in the file,
/// used for error reporting only — field contents never appear in errors.
pub fn parse_entry(line: &str, line_no: usize) -> Result<Entry> {
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    if fields.len() != ENTRY_FIELDS {
        return Err(PassKeepError::InvalidStoreFormat(format!(
            "line {line_no}: entry has {} fields, expected {ENTRY_FIELDS}",
            fields.len()
        )));
    }

    let name_bytes = decode_field(fields[0], line_no)?;
    let name = String::from_utf8(name_bytes).map_err(|_| {
        PassKeepError::InvalidStoreFormat(format!("line {line_no}: entry name is not valid UTF-8"))
    })?;

    Ok(Entry {
        name,
        description: EncryptedField {
            salt: decode_field(fields[1], line_no)?,
            iv: decode_field(fields[2], line_no)?,
            ciphertext: decode_field(fields[3], line_no)?,
        },
        secret: EncryptedField {
            salt: decode_field(fields[4], line_no)?,
            iv: decode_field(fields[5], line_no)?,
            ciphertext: decode_field(fields[6], line_no)?,
        },
    })
}

fn decode_field(field: &str, line_no: usize) -> Result<Vec<u8>> {
    BASE64.decode(field).map_err(|_| {
        PassKeepError::InvalidStoreFormat(format!("line {line_no}: field is not valid base64"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> Entry {
        Entry {
            name: "github".to_string(),
            description: EncryptedField {
                salt: vec![1; 16],
                iv: vec![2; 16],
                ciphertext: vec![3; 32],
            },
            secret: EncryptedField {
                salt: vec![4; 16],
                iv: vec![5; 16],
                ciphertext: vec![6; 48],
            },
        }
    }

    #[test]
    fn entry_line_roundtrips() {
        let entry = sample_entry();
        let line = encode_entry(&entry);
        let parsed = parse_entry(&line, 1).unwrap();

        assert_eq!(parsed.name, "github");
        assert_eq!(parsed.description.salt, entry.description.salt);
        assert_eq!(parsed.secret.ciphertext, entry.secret.ciphertext);
    }

    #[test]
    fn master_line_roundtrips() {
        let master = MasterRecord {
            salt: vec![9; 16],
            hash: vec![8; 32],
        };
        let parsed = parse_master(&encode_master(&master)).unwrap();
        assert_eq!(parsed.salt, master.salt);
        assert_eq!(parsed.hash, master.hash);
    }

    #[test]
    fn entry_name_survives_delimiter_characters() {
        // A name containing the separator must not break framing,
        // because names are base64-encoded.
        let mut entry = sample_entry();
        entry.name = "work|personal".to_string();

        let line = encode_entry(&entry);
        let parsed = parse_entry(&line, 3).unwrap();
        assert_eq!(parsed.name, "work|personal");
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        assert!(parse_entry("b25l|dHdv", 2).is_err());
        assert!(parse_master("b25l").is_err());
    }

    #[test]
    fn bad_base64_is_rejected() {
        let err = parse_entry("!!!|a|a|a|a|a|a", 5).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 5"));
        // The offending bytes must not leak into the message.
        assert!(!msg.contains("!!!"));
    }
}
