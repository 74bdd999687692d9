use std::fmt;

use pwshield_crypto::CryptoError;
use thiserror::Error;

/// The two operations the password service performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }

    const fn gerund(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypting",
            Self::Decrypt => "decrypting",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A cipher failure during password encryption or decryption.
///
/// Carries the operation, the non-secret label of the key when one was given, and the
/// underlying [`CryptoError`] as its `source()`. The message never contains the password,
/// the ciphertext or the key itself.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ProtectionError {
    operation: Operation,
    key_label: Option<String>,
    message:   String,
    #[source]
    source:    CryptoError,
}

impl ProtectionError {
    pub(crate) fn new(operation: Operation, key_label: Option<&str>, source: CryptoError) -> Self {
        let message = match key_label {
            Some(label) => format!("Error {} password with key '{}': {}", operation.gerund(), label, source),
            None => format!("Error {} password: {}", operation.gerund(), source),
        };
        Self {
            operation,
            key_label: key_label.map(str::to_owned),
            message,
            source,
        }
    }

    pub const fn operation(&self) -> Operation { self.operation }

    pub fn key_label(&self) -> Option<&str> { self.key_label.as_deref() }

    pub fn message(&self) -> &str { &self.message }

    /// The cipher failure that caused this error.
    pub const fn cause(&self) -> &CryptoError { &self.source }
}

/// Crate-wide error type for pwshield.
///
/// Password service calls return [`ProtectionError`] directly; this enum covers the layers
/// built on top of it, such as credentials files.
#[derive(Error, Debug)]
pub enum PwShieldError {
    /// I/O operations failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// A cipher operation failed
    #[error(transparent)]
    Protection(#[from] ProtectionError),

    /// The requested transition does not match the current protection state
    #[error("Inconsistent state: {reason}")]
    InconsistentState {
        reason: String,
    },

    /// A password key is required for this operation
    #[error("A password key is required")]
    MissingKey,

    /// Named connection not present in a credentials file
    #[error("Connection '{name}' not found")]
    ConnectionNotFound {
        name: String,
    },
}

/// Result type alias for pwshield operations.
pub type Result<T> = std::result::Result<T, PwShieldError>;
