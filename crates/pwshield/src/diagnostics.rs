use std::sync::Arc;

use pwshield_crypto::CryptoError;
use tracing::error;

use crate::error::Operation;

/// Something the password service wants an operator to know about.
///
/// Variants hold only non-secret context.
#[derive(Debug, Clone, Copy)]
pub enum Diagnostic<'a> {
    /// Encryption was requested without a key; nothing was encrypted.
    ///
    /// Decrypting with a blank key is a failure instead and is reported as
    /// [`Diagnostic::CipherFailure`].
    MissingKey,
    /// Encryption was requested without a password; nothing was encrypted.
    MissingPassword,
    /// The cipher failed; a [`crate::ProtectionError`] is being returned.
    CipherFailure {
        operation: Operation,
        key_label: Option<&'a str>,
        cause:     &'a CryptoError,
    },
}

/// Logging capability injected into [`crate::PasswordService`].
pub trait Diagnostics {
    fn report(&self, diagnostic: &Diagnostic<'_>);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, diagnostic: &Diagnostic<'_>) { (**self).report(diagnostic) }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Arc<D> {
    fn report(&self, diagnostic: &Diagnostic<'_>) { (**self).report(diagnostic) }
}

/// Default diagnostics sink: structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic<'_>) {
        match *diagnostic {
            Diagnostic::MissingKey => {
                error!(operation = "encrypt", "Missing password key used to encrypt the password");
            },
            Diagnostic::MissingPassword => {
                error!(operation = "encrypt", "Missing password to encrypt");
            },
            Diagnostic::CipherFailure {
                operation,
                key_label,
                cause,
            } => {
                error!(
                    operation = operation.as_str(),
                    key_label = key_label.unwrap_or("<unlabeled>"),
                    "Password {} failed: {}",
                    operation,
                    cause
                );
            },
        }
    }
}

/// Diagnostics sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn report(&self, _diagnostic: &Diagnostic<'_>) {}
}
