//! Credentials files: named connection credentials whose passwords can be protected in place.
//!
//! A credentials file is JSON:
//!
//! ```json
//! {
//!   "encrypted_passwords": false,
//!   "connections": {
//!     "left_hs2": { "uri": "jdbc:hive2://left:10000", "username": "svc", "password": "hunter2" }
//!   }
//! }
//! ```
//!
//! The `encrypted_passwords` flag records which state every password is in. Encrypting or
//! decrypting flips it, and asking for the transition the file is already in is refused.

use std::{collections::BTreeMap, fmt, path::Path};

use pwshield_crypto::CipherFactory;
use serde::{Deserialize, Serialize};
use tokio::fs as tokio_fs;
use tracing::{debug, info};

use crate::{
    diagnostics::Diagnostics,
    key::PasswordKey,
    validation::non_blank,
    PasswordService,
    PwShieldError,
    Result,
};

/// Credentials for one downstream connection.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri:        Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username:   Option<String>,
    /// Cleartext or protected, depending on [`CredentialsFile::encrypted_passwords`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password:   Option<String>,
    /// Any other connection properties, kept as-is.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl fmt::Debug for ConnectionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionCredentials")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("properties", &self.properties)
            .finish()
    }
}

/// A set of named connection credentials plus the protection state of their passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsFile {
    #[serde(default)]
    pub encrypted_passwords: bool,
    #[serde(default)]
    pub connections:         BTreeMap<String, ConnectionCredentials>,
}

impl CredentialsFile {
    /// Reads a credentials file from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading credentials file {}", path.display());
        let content = tokio_fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the credentials file to disk as pretty-printed JSON.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        tokio_fs::write(path, content).await?;
        debug!("Saved credentials file {}", path.display());
        Ok(())
    }

    /// Encrypts every configured password and marks the file as encrypted.
    ///
    /// Connections without a password are left alone. If any password fails to encrypt,
    /// nothing is changed. Returns the number of passwords encrypted.
    ///
    /// # Errors
    /// `InconsistentState` if the file is already encrypted, `MissingKey` if the key is blank,
    /// `Protection` if the cipher fails.
    pub fn encrypt_passwords<F, D>(&mut self, service: &PasswordService<F, D>, key: &PasswordKey) -> Result<usize>
    where
        F: CipherFactory,
        D: Diagnostics,
    {
        if self.encrypted_passwords {
            return Err(PwShieldError::InconsistentState {
                reason: "passwords are already encrypted".to_owned(),
            });
        }
        let updates = self.transform(key, |password| service.encrypt_with(key, Some(password)))?;
        let count = updates.len();
        self.apply(updates);
        self.encrypted_passwords = true;
        info!(count, key_label = key.label(), "Encrypted connection passwords");
        Ok(count)
    }

    /// Decrypts every configured password and marks the file as cleartext.
    ///
    /// All-or-nothing, like [`CredentialsFile::encrypt_passwords`]. Returns the number of
    /// passwords decrypted.
    ///
    /// # Errors
    /// `InconsistentState` if the file is not encrypted, `MissingKey` if the key is blank,
    /// `Protection` if the cipher fails (for example with the wrong key).
    pub fn decrypt_passwords<F, D>(&mut self, service: &PasswordService<F, D>, key: &PasswordKey) -> Result<usize>
    where
        F: CipherFactory,
        D: Diagnostics,
    {
        if !self.encrypted_passwords {
            return Err(PwShieldError::InconsistentState {
                reason: "passwords are not encrypted".to_owned(),
            });
        }
        let updates = self.transform(key, |password| service.decrypt_with(key, Some(password)))?;
        let count = updates.len();
        self.apply(updates);
        self.encrypted_passwords = false;
        info!(count, key_label = key.label(), "Decrypted connection passwords");
        Ok(count)
    }

    /// The cleartext password of a connection, decrypting it if the file is encrypted.
    ///
    /// `Ok(None)` means no password is configured for the connection.
    ///
    /// # Errors
    /// `ConnectionNotFound` for an unknown name, `Protection` if decryption fails.
    pub fn resolve_password<F, D>(
        &self,
        service: &PasswordService<F, D>,
        key: &PasswordKey,
        name: &str,
    ) -> Result<Option<String>>
    where
        F: CipherFactory,
        D: Diagnostics,
    {
        let connection = self
            .connections
            .get(name)
            .ok_or_else(|| {
                PwShieldError::ConnectionNotFound {
                    name: name.to_owned(),
                }
            })?;

        if self.encrypted_passwords {
            Ok(service.decrypt_with(key, connection.password.as_deref())?)
        }
        else {
            Ok(non_blank(connection.password.as_deref()).map(str::to_owned))
        }
    }

    fn transform<T>(&self, key: &PasswordKey, mut convert: T) -> Result<Vec<(String, String)>>
    where
        T: FnMut(&str) -> std::result::Result<Option<String>, crate::ProtectionError>,
    {
        if key.is_blank() {
            return Err(PwShieldError::MissingKey);
        }

        let mut updates = Vec::new();
        for (name, connection) in &self.connections {
            let Some(password) = non_blank(connection.password.as_deref())
            else {
                continue;
            };
            if let Some(converted) = convert(password)? {
                updates.push((name.clone(), converted));
            }
        }
        Ok(updates)
    }

    fn apply(&mut self, updates: Vec<(String, String)>) {
        for (name, password) in updates {
            if let Some(connection) = self.connections.get_mut(&name) {
                connection.password = Some(password);
            }
        }
    }
}
