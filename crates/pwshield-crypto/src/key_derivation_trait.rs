use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Core trait for key derivation functions used in pwshield-crypto.
/// Turns a human-chosen password key into the 32 bytes an AEAD cipher needs.
///
/// Implementations carry their own cost parameters, so the envelope can record them next to
/// the salt and decryption can reproduce the exact derivation later. The trait is sealed to
/// prevent external implementations that might not meet security requirements.
pub trait KeyDerivationFunction: private::Sealed {
    /// Derives a 32-byte key from a passphrase using the provided salt.
    ///
    /// # Arguments
    /// * `passphrase` - The passphrase to derive the key from
    /// * `salt` - The per-envelope random salt
    ///
    /// # Returns
    /// A 32-byte key suitable for encryption, zeroized on drop
    ///
    /// # Errors
    /// Returns `CryptoError::KeyDerivation` if the parameters are invalid or derivation fails
    fn derive_key(&self, passphrase: &str, salt: &[u8]) -> Result<Zeroizing<[u8; 32]>, CryptoError>;
}

// Sealing the trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}
