use crate::error::CryptoError;

/// Core trait for the AEAD algorithms used to seal passwords.
/// This trait abstracts authenticated encryption so the envelope layer can switch algorithms
/// by identifier while keeping one byte layout.
///
/// The trait is sealed to prevent external implementations that might not authenticate
/// their ciphertext; wrong-key detection relies on the tag check in `open`.
pub trait EncryptionAlgorithm: private::Sealed {
    /// Length in bytes of the random nonce prefixed to every sealed message.
    const NONCE_LEN: usize;

    /// Encrypts the given data using the provided key.
    /// Returns the random nonce followed by ciphertext and tag.
    ///
    /// # Errors
    /// Returns `CryptoError::Encryption` if encryption fails
    fn seal(data: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError>;

    /// Decrypts data previously produced by [`EncryptionAlgorithm::seal`].
    ///
    /// # Errors
    /// Returns `CryptoError::Decryption` if the input is shorter than a nonce or the
    /// authentication tag does not verify (wrong key, tampered bytes)
    fn open(sealed: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError>;
}

// Sealing the trait to prevent external implementations
pub(crate) mod private {
    pub trait Sealed {}
}
