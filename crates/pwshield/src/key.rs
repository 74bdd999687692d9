use std::fmt;

use zeroize::Zeroizing;

use crate::validation::is_blank;

/// The secret that parameterizes password protection.
///
/// Holds the key string in zeroizing storage and an optional non-secret label (for example
/// the name of the configuration the key belongs to). Only the label ever reaches logs or
/// error messages.
#[derive(Clone)]
pub struct PasswordKey {
    secret: Zeroizing<String>,
    label:  Option<String>,
}

impl PasswordKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
            label:  None,
        }
    }

    /// A key with a label that identifies it in diagnostics.
    pub fn labeled(label: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
            label:  Some(label.into()),
        }
    }

    pub fn expose_secret(&self) -> &str { &self.secret }

    pub fn label(&self) -> Option<&str> { self.label.as_deref() }

    /// Whether the secret is empty or whitespace only.
    pub fn is_blank(&self) -> bool { is_blank(Some(self.secret.as_str())) }
}

impl fmt::Debug for PasswordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordKey")
            .field("label", &self.label)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl From<&str> for PasswordKey {
    fn from(secret: &str) -> Self { Self::new(secret) }
}

impl From<String> for PasswordKey {
    fn from(secret: String) -> Self { Self::new(secret) }
}
