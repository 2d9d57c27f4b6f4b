//! AES-256-CBC encryption with PKCS#7 padding.
//!
//! Each call to `encrypt` generates a fresh random 16-byte IV and returns
//! it alongside the ciphertext; the IV is never caller-supplied and never
//! reused. There is no authentication tag — the store format stores a
//! bare `salt|iv|ciphertext` triple per field, and a wrong key surfaces
//! as a padding failure on decrypt.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::errors::{PassKeepError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Size of the AES-CBC initialization vector in bytes (one block).
pub const IV_LEN: usize = 16;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the freshly generated IV and the padded ciphertext.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<([u8; IV_LEN], Vec<u8>)> {
    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(key, &iv)
        .map_err(|e| PassKeepError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    Ok((iv, ciphertext))
}

/// Decrypt data that was produced by `encrypt`.
///
/// Fails uniformly with `DecryptionFailed` whether the key/IV is wrong or
/// the ciphertext is corrupted — the two cases are intentionally not
/// distinguished.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    let cipher =
        Aes256CbcDec::new_from_slices(key, iv).map_err(|_| PassKeepError::DecryptionFailed)?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| PassKeepError::DecryptionFailed)
}
