use chacha20poly1305::{
    aead::{Aead, KeyInit},
    Key,
    XChaCha20Poly1305,
    XNonce,
};
use rand::RngCore;

use crate::{encrypt_trait::EncryptionAlgorithm, error::CryptoError};

/// XChaCha20Poly1305 encryption implementation.
/// Uses the extended ChaCha20 nonce (XChaCha20) with Poly1305 for authenticated encryption.
/// Fast on hardware without AES acceleration, and the 192-bit nonce makes random nonces safe
/// for any realistic number of stored passwords.
pub struct XChaCha20Poly1305Encryptor;

impl EncryptionAlgorithm for XChaCha20Poly1305Encryptor {
    const NONCE_LEN: usize = 24;

    fn seal(data: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError> {
        let cipher = XChaCha20Poly1305::new(Key::from_slice(key));
        let mut nonce_bytes = [0u8; Self::NONCE_LEN];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = XNonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, data)
            .map_err(|_| CryptoError::Encryption)?;
        let mut sealed = nonce_bytes.to_vec();
        sealed.extend_from_slice(&ciphertext);
        Ok(sealed)
    }

    fn open(sealed: &[u8], key: &[u8; 32]) -> Result<Vec<u8>, CryptoError> {
        let (nonce_bytes, ciphertext) = sealed
            .split_at_checked(Self::NONCE_LEN)
            .ok_or(CryptoError::Decryption)?;
        let cipher = XChaCha20Poly1305::new(Key::from_slice(key));
        let nonce = XNonce::from_slice(nonce_bytes);
        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CryptoError::Decryption)
    }
}

impl crate::encrypt_trait::private::Sealed for XChaCha20Poly1305Encryptor {}
