//! # pwshield Crypto
//!
//! The cipher collaborator behind the pwshield password service. It turns a password key and
//! a cleartext password into a self-describing, authenticated envelope, and back.
//!
//! ## Design Principles
//!
//! - **Modular Architecture**: Traits are separated from implementations, allowing algorithm
//!   switching per envelope.
//! - **Security First**: Derived keys and key copies are zeroized. Sealed traits prevent
//!   external unauthenticated implementations.
//! - **Unified Error Handling**: Single `CryptoError` enum returned by every fallible call.
//! - **RustCrypto Only**: chacha20poly1305, aes-gcm, aes-gcm-siv, argon2 and pbkdf2.
//! - **Explicit Configuration**: `CryptoConfig` is passed in by the caller; there is no global.
//!
//! ## Usage
//!
//! ```rust
//! use pwshield_crypto::{Cipher, CipherFactory, CryptoConfig, KeyDerivationChoice, PassphraseCipherFactory};
//!
//! let config = CryptoConfig {
//!     key_derivation: KeyDerivationChoice::Pbkdf2 { iterations: 10_000 },
//!     ..CryptoConfig::default()
//! };
//! let cipher = PassphraseCipherFactory::new(config).cipher("mySecretKey").unwrap();
//! let protected = cipher.encrypt("hunter2").unwrap();
//! assert_eq!(cipher.decrypt(&protected).unwrap(), "hunter2");
//! ```

pub mod cipher;
mod crypto_config;
pub mod encrypt;
pub mod encrypt_trait;
pub mod envelope;
pub mod error;
pub mod key_derivation;
pub mod key_derivation_trait;

// Re-export crypto types for convenience
pub use cipher::{Cipher, CipherFactory, PassphraseCipher, PassphraseCipherFactory};
pub use crypto_config::*;
pub use encrypt::{generate_password_key, Aes256GcmEncryptor, Aes256GcmSivEncryptor, XChaCha20Poly1305Encryptor};
pub use encrypt_trait::EncryptionAlgorithm;
pub use error::{CryptoError, KeyDerivationError};
pub use key_derivation::{Argon2KeyDerivation, Argon2Params, Pbkdf2KeyDerivation};
pub use key_derivation_trait::KeyDerivationFunction;
use zeroize::Zeroizing;

/// Seals data with the chosen algorithm. Returns nonce + ciphertext + tag.
pub fn encrypt_data(algorithm: EncryptionAlgorithmChoice, data: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError> {
    match algorithm {
        EncryptionAlgorithmChoice::XChaCha20Poly1305 => XChaCha20Poly1305Encryptor::seal(data, key),
        EncryptionAlgorithmChoice::Aes256GcmSiv => Aes256GcmSivEncryptor::seal(data, key),
        EncryptionAlgorithmChoice::Aes256Gcm => Aes256GcmEncryptor::seal(data, key),
    }
}

/// Opens data sealed by [`encrypt_data`] with the same algorithm and key.
pub fn decrypt_data(algorithm: EncryptionAlgorithmChoice, sealed: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError> {
    match algorithm {
        EncryptionAlgorithmChoice::XChaCha20Poly1305 => XChaCha20Poly1305Encryptor::open(sealed, key),
        EncryptionAlgorithmChoice::Aes256GcmSiv => Aes256GcmSivEncryptor::open(sealed, key),
        EncryptionAlgorithmChoice::Aes256Gcm => Aes256GcmEncryptor::open(sealed, key),
    }
}

/// Derives a 32-byte key from a passphrase and salt with the chosen KDF.
pub fn derive_key(
    choice: &KeyDerivationChoice,
    passphrase: &str,
    salt: &[u8],
) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    match *choice {
        KeyDerivationChoice::Argon2id(params) => Argon2KeyDerivation::new(params).derive_key(passphrase, salt),
        KeyDerivationChoice::Pbkdf2 {
            iterations,
        } => Pbkdf2KeyDerivation::new(iterations).derive_key(passphrase, salt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_data() {
        let key = [0u8; 32];
        let data = b"test data";
        let sealed = encrypt_data(EncryptionAlgorithmChoice::default(), data, &key).unwrap();
        let opened = decrypt_data(EncryptionAlgorithmChoice::default(), &sealed, &key).unwrap();
        assert_eq!(data, opened.as_slice());
    }

    #[test]
    fn test_algorithms_are_not_interchangeable() {
        let key = [0u8; 32];
        let sealed = encrypt_data(EncryptionAlgorithmChoice::Aes256Gcm, b"data", &key).unwrap();
        assert!(decrypt_data(EncryptionAlgorithmChoice::Aes256GcmSiv, &sealed, &key).is_err());
    }

    #[test]
    fn test_derive_key_dispatch() {
        let salt = [4u8; 16];
        let pbkdf2 = KeyDerivationChoice::Pbkdf2 {
            iterations: 1_000,
        };
        let argon2 = KeyDerivationChoice::Argon2id(Argon2Params {
            memory_kib:  64,
            iterations:  1,
            parallelism: 1,
        });
        let a = derive_key(&pbkdf2, "pass", &salt).unwrap();
        let b = derive_key(&argon2, "pass", &salt).unwrap();
        assert_ne!(*a, *b);
    }
}
