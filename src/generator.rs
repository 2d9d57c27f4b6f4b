//! Random password generation for the `gen` command.

use rand::Rng;
use zeroize::Zeroizing;

use crate::errors::{PassKeepError, Result};

/// Default length when `gen` is invoked without one.
pub const DEFAULT_LENGTH: usize = 32;

/// Printable ASCII range used for generated passwords: `!` through `~`.
const CHAR_LOW: u8 = 33;
const CHAR_HIGH: u8 = 126;

/// Generate a random password of `length` printable ASCII characters.
///
/// Fails with `InvalidSecretLength` for a zero length. The result is
/// wiped from memory on drop.
pub fn generate_password(length: usize) -> Result<Zeroizing<String>> {
    if length == 0 {
        return Err(PassKeepError::InvalidSecretLength(length));
    }

    let mut rng = rand::rng();
    let mut password = Zeroizing::new(String::with_capacity(length));
    for _ in 0..length {
        password.push(char::from(rng.random_range(CHAR_LOW..=CHAR_HIGH)));
    }

    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(
            generate_password(0),
            Err(PassKeepError::InvalidSecretLength(0))
        ));
    }

    #[test]
    fn generated_password_has_requested_length() {
        let pw = generate_password(48).unwrap();
        assert_eq!(pw.len(), 48);
    }

    #[test]
    fn generated_characters_are_printable_ascii() {
        let pw = generate_password(256).unwrap();
        assert!(pw.bytes().all(|b| (CHAR_LOW..=CHAR_HIGH).contains(&b)));
    }

    #[test]
    fn successive_passwords_differ() {
        let a = generate_password(32).unwrap();
        let b = generate_password(32).unwrap();
        assert_ne!(*a, *b);
    }
}
