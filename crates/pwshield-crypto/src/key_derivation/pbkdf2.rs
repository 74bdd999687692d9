use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::{
    error::{CryptoError, KeyDerivationError},
    key_derivation_trait::KeyDerivationFunction,
};

/// Default PBKDF2-HMAC-SHA256 iteration count (OWASP recommendation).
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 600_000;

/// PBKDF2 key derivation implementation.
/// Uses PBKDF2 with HMAC-SHA256, for deployments where Argon2's memory cost is unacceptable.
pub struct Pbkdf2KeyDerivation {
    iterations: u32,
}

impl Pbkdf2KeyDerivation {
    pub const fn new(iterations: u32) -> Self {
        Self {
            iterations,
        }
    }

    pub const fn iterations(&self) -> u32 { self.iterations }
}

impl Default for Pbkdf2KeyDerivation {
    fn default() -> Self { Self::new(DEFAULT_PBKDF2_ITERATIONS) }
}

impl KeyDerivationFunction for Pbkdf2KeyDerivation {
    fn derive_key(&self, passphrase: &str, salt: &[u8]) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        if self.iterations == 0 {
            return Err(KeyDerivationError::InvalidParameters.into());
        }

        let mut output_key_material = Zeroizing::new([0u8; 32]);
        pbkdf2_hmac::<Sha256>(
            passphrase.as_bytes(),
            salt,
            self.iterations,
            &mut *output_key_material,
        );

        Ok(output_key_material)
    }
}

impl crate::key_derivation_trait::private::Sealed for Pbkdf2KeyDerivation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key() {
        let kdf = Pbkdf2KeyDerivation::new(1_000);
        let salt = [1u8; 16];
        let key1 = kdf.derive_key("test_passphrase", &salt).unwrap();
        let key1_again = kdf.derive_key("test_passphrase", &salt).unwrap();
        assert_eq!(*key1, *key1_again);

        let key2 = kdf.derive_key("test_passphrase", &[2u8; 16]).unwrap();
        assert_ne!(*key1, *key2);

        let key3 = kdf.derive_key("different", &salt).unwrap();
        assert_ne!(*key1, *key3);
    }

    #[test]
    fn test_iteration_count_matters() {
        let salt = [1u8; 16];
        let fast = Pbkdf2KeyDerivation::new(1_000).derive_key("pw", &salt).unwrap();
        let slow = Pbkdf2KeyDerivation::new(2_000).derive_key("pw", &salt).unwrap();
        assert_ne!(*fast, *slow);
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = Pbkdf2KeyDerivation::new(0).derive_key("pw", &[0u8; 16]);
        assert!(matches!(
            result,
            Err(CryptoError::KeyDerivation(KeyDerivationError::InvalidParameters))
        ));
    }
}
