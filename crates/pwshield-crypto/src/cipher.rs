use rand::RngCore;
use tracing::trace;
use zeroize::Zeroizing;

use crate::{
    decrypt_data,
    derive_key,
    encrypt_data,
    envelope::{within_budget, Envelope, SALT_LEN},
    error::{CryptoError, KeyDerivationError},
    CryptoConfig,
};

/// A password cipher bound to one key.
///
/// This is the capability the password service drives: turn a cleartext password into a
/// storable string and back. Every failure is returned as a [`CryptoError`]; implementations
/// must not panic on malformed input.
pub trait Cipher {
    /// Protects `plaintext`, returning an opaque string safe to persist.
    fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError>;

    /// Recovers the plaintext from a string produced by [`Cipher::encrypt`] with the same key.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CryptoError>;
}

/// Builds a [`Cipher`] from a password key string.
///
/// The service asks for a fresh cipher on every call; factories must not retain the key.
pub trait CipherFactory {
    type Cipher: Cipher;

    /// Creates a cipher for `key`.
    ///
    /// # Errors
    /// Returns `CryptoError::MissingKey` when `key` is empty.
    fn cipher(&self, key: &str) -> Result<Self::Cipher, CryptoError>;
}

impl<F: CipherFactory + ?Sized> CipherFactory for &F {
    type Cipher = F::Cipher;

    fn cipher(&self, key: &str) -> Result<Self::Cipher, CryptoError> { (**self).cipher(key) }
}

/// Default [`CipherFactory`]: an AEAD over a key derived from the password key with a
/// memory-hard KDF, written as a hex-encoded [`Envelope`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PassphraseCipherFactory {
    config: CryptoConfig,
}

impl PassphraseCipherFactory {
    pub const fn new(config: CryptoConfig) -> Self {
        Self {
            config,
        }
    }

    pub const fn config(&self) -> &CryptoConfig { &self.config }
}

impl CipherFactory for PassphraseCipherFactory {
    type Cipher = PassphraseCipher;

    fn cipher(&self, key: &str) -> Result<PassphraseCipher, CryptoError> {
        if key.is_empty() {
            return Err(CryptoError::MissingKey);
        }
        Ok(PassphraseCipher {
            passphrase: Zeroizing::new(key.to_owned()),
            config:     self.config,
        })
    }
}

/// Cipher produced by [`PassphraseCipherFactory`]. The key copy is wiped on drop.
pub struct PassphraseCipher {
    passphrase: Zeroizing<String>,
    config:     CryptoConfig,
}

impl std::fmt::Debug for PassphraseCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassphraseCipher")
            .field("passphrase", &"<redacted>")
            .field("config", &self.config)
            .finish()
    }
}

impl Cipher for PassphraseCipher {
    fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        if !within_budget(&self.config.key_derivation) {
            return Err(KeyDerivationError::InvalidParameters.into());
        }

        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);

        let key = derive_key(&self.config.key_derivation, &self.passphrase, &salt)?;
        let sealed = encrypt_data(self.config.encryption_algorithm, plaintext.as_bytes(), &key)?;

        let envelope = Envelope {
            encryption:     self.config.encryption_algorithm,
            key_derivation: self.config.key_derivation,
            salt:           &salt,
            sealed:         &sealed,
        };
        trace!(
            encryption = ?envelope.encryption,
            key_derivation = envelope.key_derivation.id(),
            "Sealed password envelope"
        );
        Ok(hex::encode(envelope.to_bytes()))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CryptoError> {
        let bytes = hex::decode(ciphertext.trim())?;
        let envelope = Envelope::parse(&bytes)?;
        trace!(
            encryption = ?envelope.encryption,
            key_derivation = envelope.key_derivation.id(),
            "Opening password envelope"
        );

        let key = derive_key(&envelope.key_derivation, &self.passphrase, envelope.salt)?;
        let plaintext = decrypt_data(envelope.encryption, envelope.sealed, &key)?;
        String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidUtf8)
    }
}
