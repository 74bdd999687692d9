//! # pwshield
//!
//! Password protection for configuration subsystems that must persist secrets (service
//! account passwords, connection credentials) without storing them in cleartext.
//!
//! The [`PasswordService`] is the entry point. It validates inputs, drives a pluggable
//! [`pwshield_crypto::Cipher`], and reports problems through an injected [`Diagnostics`]
//! sink. Blank inputs are answered with `Ok(None)` so callers can check whether a password is
//! configured; genuine cipher failures surface as [`ProtectionError`].
//!
//! [`credentials::CredentialsFile`] builds on the service to protect every password in a
//! JSON credentials file at once.

pub mod credentials;
pub mod diagnostics;
pub mod error;
pub mod key;
pub mod service;
pub mod validation;

pub use credentials::{ConnectionCredentials, CredentialsFile};
pub use diagnostics::{Diagnostic, Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use error::{Operation, ProtectionError, PwShieldError, Result};
pub use key::PasswordKey;
pub use service::PasswordService;
