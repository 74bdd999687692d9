use serde::{Deserialize, Serialize};

use crate::{
    error::CryptoError,
    key_derivation::{Argon2Params, DEFAULT_PBKDF2_ITERATIONS},
};

/// Encryption algorithm options for new envelopes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EncryptionAlgorithmChoice {
    #[default]
    XChaCha20Poly1305,
    Aes256GcmSiv,
    Aes256Gcm,
}

impl EncryptionAlgorithmChoice {
    /// Identifier written into the envelope header.
    pub const fn id(self) -> u8 {
        match self {
            Self::XChaCha20Poly1305 => 1,
            Self::Aes256GcmSiv => 2,
            Self::Aes256Gcm => 3,
        }
    }

    pub const fn from_id(id: u8) -> Result<Self, CryptoError> {
        match id {
            1 => Ok(Self::XChaCha20Poly1305),
            2 => Ok(Self::Aes256GcmSiv),
            3 => Ok(Self::Aes256Gcm),
            other => Err(CryptoError::UnknownAlgorithm(other)),
        }
    }
}

/// Key derivation options for new envelopes, together with their cost parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "algorithm")]
pub enum KeyDerivationChoice {
    Argon2id(Argon2Params),
    Pbkdf2 {
        iterations: u32,
    },
}

impl KeyDerivationChoice {
    /// Identifier written into the envelope header.
    pub const fn id(&self) -> u8 {
        match *self {
            Self::Argon2id(_) => 1,
            Self::Pbkdf2 {
                ..
            } => 2,
        }
    }

    /// PBKDF2 with the default iteration count.
    pub const fn pbkdf2() -> Self {
        Self::Pbkdf2 {
            iterations: DEFAULT_PBKDF2_ITERATIONS,
        }
    }
}

impl Default for KeyDerivationChoice {
    fn default() -> Self { Self::Argon2id(Argon2Params::default()) }
}

/// Cryptographic configuration used when sealing new passwords.
///
/// Decryption never consults this: every envelope names its own algorithms and costs, so
/// passwords protected under an older configuration stay readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CryptoConfig {
    #[serde(default)]
    pub encryption_algorithm: EncryptionAlgorithmChoice,
    #[serde(default)]
    pub key_derivation:       KeyDerivationChoice,
}
