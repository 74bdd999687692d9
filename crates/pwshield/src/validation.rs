//! Input gating for the password service.
//!
//! Blank inputs never reach the cipher. Decrypting a blank value is a silent no-op because
//! callers use it to ask "is a password configured?". Encrypting with a blank key or password
//! is also a no-op, but one worth telling the operator about.

use crate::key::PasswordKey;

/// Returns true if the value is missing, empty, or whitespace only.
pub fn is_blank(value: Option<&str>) -> bool { value.is_none_or(|v| v.trim().is_empty()) }

/// Returns the value unchanged if it is not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> { value.filter(|v| !v.trim().is_empty()) }

/// Why an encrypt request was turned away before reaching the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingKey,
    MissingPassword,
}

/// Gate for encryption: the key is checked first, then the password.
pub fn check_encrypt<'a>(key: &PasswordKey, password: Option<&'a str>) -> Result<&'a str, Rejection> {
    if key.is_blank() {
        return Err(Rejection::MissingKey);
    }
    non_blank(password).ok_or(Rejection::MissingPassword)
}

/// Gate for decryption: only the ciphertext decides whether the cipher is consulted.
pub fn check_decrypt(ciphertext: Option<&str>) -> Option<&str> { non_blank(ciphertext) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(is_blank(Some("\n\t")));
        assert!(!is_blank(Some(" x ")));
    }

    #[test]
    fn test_non_blank_keeps_original_value() {
        assert_eq!(non_blank(Some(" pw ")), Some(" pw "));
        assert_eq!(non_blank(Some(" ")), None);
    }

    #[test]
    fn test_check_encrypt_key_first() {
        let blank = PasswordKey::new("");
        assert_eq!(check_encrypt(&blank, None), Err(Rejection::MissingKey));
        assert_eq!(check_encrypt(&blank, Some("pw")), Err(Rejection::MissingKey));

        let key = PasswordKey::new("k");
        assert_eq!(check_encrypt(&key, Some("")), Err(Rejection::MissingPassword));
        assert_eq!(check_encrypt(&key, None), Err(Rejection::MissingPassword));
        assert_eq!(check_encrypt(&key, Some("pw")), Ok("pw"));
    }

    #[test]
    fn test_check_decrypt() {
        assert_eq!(check_decrypt(None), None);
        assert_eq!(check_decrypt(Some("")), None);
        assert_eq!(check_decrypt(Some("abc")), Some("abc"));
    }
}
