use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm,
    Key,
    Nonce,
};
use rand::RngCore;

use crate::{encrypt_trait::EncryptionAlgorithm, error::CryptoError};

/// AES-256-GCM encryption implementation.
/// Uses AES-256 in GCM mode for authenticated encryption. Generates a random nonce for each
/// encryption.
pub struct Aes256GcmEncryptor;

impl EncryptionAlgorithm for Aes256GcmEncryptor {
    const NONCE_LEN: usize = 12;

    fn seal(data: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        let mut nonce_bytes = [0u8; Self::NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher.encrypt(nonce, data).map_err(|_| CryptoError::Encryption)?;
        let mut sealed = nonce_bytes.to_vec();
        sealed.extend_from_slice(&ciphertext);
        Ok(sealed)
    }

    fn open(sealed: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError> {
        let (nonce_bytes, ciphertext) = sealed
            .split_at_checked(Self::NONCE_LEN)
            .ok_or(CryptoError::Decryption)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        let nonce = Nonce::from_slice(nonce_bytes);
        cipher.decrypt(nonce, ciphertext).map_err(|_| CryptoError::Decryption)
    }
}

impl crate::encrypt_trait::private::Sealed for Aes256GcmEncryptor {}
