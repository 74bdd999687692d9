use pwshield_crypto::{Cipher, CipherFactory, CryptoConfig, CryptoError, PassphraseCipherFactory};
use tracing::{debug, trace};

use crate::{
    diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics},
    error::{Operation, ProtectionError},
    key::PasswordKey,
    validation::{check_decrypt, check_encrypt, Rejection},
};

/// Encrypts and decrypts stored passwords.
///
/// `PasswordService` gates requests on blank inputs, builds a fresh [`Cipher`] from the key
/// for every call, and turns cipher failures into [`ProtectionError`]. It holds no mutable
/// state, so one instance can be shared freely across threads.
///
/// | Call    | Blank key                     | Blank input                        | Cipher fails       |
/// |---------|-------------------------------|------------------------------------|--------------------|
/// | encrypt | `Ok(None)`, reports missing key | `Ok(None)`, reports missing password | `ProtectionError` |
/// | decrypt | `ProtectionError`             | `Ok(None)`, silent                 | `ProtectionError` |
///
/// # Examples
///
/// ```rust
/// use pwshield::PasswordService;
/// use pwshield_crypto::{CryptoConfig, KeyDerivationChoice};
///
/// let service = PasswordService::with_config(CryptoConfig {
///     key_derivation: KeyDerivationChoice::Pbkdf2 { iterations: 10_000 },
///     ..CryptoConfig::default()
/// });
///
/// let protected = service.encrypt_password(Some("mySecretKey"), Some("hunter2")).unwrap().unwrap();
/// let revealed = service.decrypt_password(Some("mySecretKey"), Some(protected.as_str())).unwrap();
/// assert_eq!(revealed.as_deref(), Some("hunter2"));
///
/// // Nothing configured is not an error.
/// assert_eq!(service.decrypt_password(Some("mySecretKey"), None).unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PasswordService<F = PassphraseCipherFactory, D = TracingDiagnostics> {
    factory:     F,
    diagnostics: D,
}

impl PasswordService {
    /// A service using the default cipher and `tracing` diagnostics.
    pub fn new() -> Self { Self::default() }

    /// A service using the default cipher with the given configuration.
    pub const fn with_config(config: CryptoConfig) -> Self {
        Self {
            factory:     PassphraseCipherFactory::new(config),
            diagnostics: TracingDiagnostics,
        }
    }
}

impl<F, D> PasswordService<F, D>
where
    F: CipherFactory,
    D: Diagnostics,
{
    /// A service built from an explicit cipher factory and diagnostics sink.
    pub const fn with_parts(factory: F, diagnostics: D) -> Self {
        Self {
            factory,
            diagnostics,
        }
    }

    pub const fn factory(&self) -> &F { &self.factory }

    pub const fn diagnostics(&self) -> &D { &self.diagnostics }

    /// Encrypts `password` with `key`.
    ///
    /// Returns `Ok(None)` and reports a diagnostic when the key or the password is blank.
    ///
    /// # Errors
    /// Returns [`ProtectionError`] if the cipher fails.
    pub fn encrypt_password(
        &self,
        key: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<String>, ProtectionError> {
        self.encrypt_with(&PasswordKey::new(key.unwrap_or_default()), password)
    }

    /// Decrypts `ciphertext` with `key`.
    ///
    /// Returns `Ok(None)` without touching the cipher when `ciphertext` is blank.
    ///
    /// # Errors
    /// Returns [`ProtectionError`] if the key is blank or the cipher fails (wrong key,
    /// corrupt or truncated ciphertext).
    pub fn decrypt_password(
        &self,
        key: Option<&str>,
        ciphertext: Option<&str>,
    ) -> Result<Option<String>, ProtectionError> {
        self.decrypt_with(&PasswordKey::new(key.unwrap_or_default()), ciphertext)
    }

    /// Same as [`PasswordService::encrypt_password`], with a [`PasswordKey`] whose label is
    /// used in diagnostics and errors.
    pub fn encrypt_with(&self, key: &PasswordKey, password: Option<&str>) -> Result<Option<String>, ProtectionError> {
        let password = match check_encrypt(key, password) {
            Ok(password) => password,
            Err(Rejection::MissingKey) => {
                self.diagnostics.report(&Diagnostic::MissingKey);
                return Ok(None);
            },
            Err(Rejection::MissingPassword) => {
                self.diagnostics.report(&Diagnostic::MissingPassword);
                return Ok(None);
            },
        };

        trace!(key_label = key.label(), "Encrypting password");
        let cipher = self
            .factory
            .cipher(key.expose_secret())
            .map_err(|e| self.fail(Operation::Encrypt, key, e))?;
        let ciphertext = cipher
            .encrypt(password)
            .map_err(|e| self.fail(Operation::Encrypt, key, e))?;
        debug!(key_label = key.label(), "Password encrypted");
        Ok(Some(ciphertext))
    }

    /// Same as [`PasswordService::decrypt_password`], with a [`PasswordKey`] whose label is
    /// used in diagnostics and errors.
    pub fn decrypt_with(&self, key: &PasswordKey, ciphertext: Option<&str>) -> Result<Option<String>, ProtectionError> {
        let Some(ciphertext) = check_decrypt(ciphertext)
        else {
            return Ok(None);
        };
        if key.is_blank() {
            return Err(self.fail(Operation::Decrypt, key, CryptoError::MissingKey));
        }

        trace!(key_label = key.label(), "Decrypting password");
        let cipher = self
            .factory
            .cipher(key.expose_secret())
            .map_err(|e| self.fail(Operation::Decrypt, key, e))?;
        let password = cipher
            .decrypt(ciphertext)
            .map_err(|e| self.fail(Operation::Decrypt, key, e))?;
        debug!(key_label = key.label(), "Password decrypted");
        Ok(Some(password))
    }

    fn fail(&self, operation: Operation, key: &PasswordKey, cause: CryptoError) -> ProtectionError {
        self.diagnostics.report(&Diagnostic::CipherFailure {
            operation,
            key_label: key.label(),
            cause: &cause,
        });
        ProtectionError::new(operation, key.label(), cause)
    }
}
