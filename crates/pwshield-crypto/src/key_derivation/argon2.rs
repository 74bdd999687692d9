use argon2::{Algorithm, Argon2, Params, Version};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::{
    error::{CryptoError, KeyDerivationError},
    key_derivation_trait::KeyDerivationFunction,
};

/// Cost parameters for Argon2id.
///
/// Defaults follow the OWASP password storage recommendation (19 MiB, 2 passes, 1 lane).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argon2Params {
    /// Memory cost in KiB
    pub memory_kib:  u32,
    /// Number of passes
    pub iterations:  u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            memory_kib:  19_456,
            iterations:  2,
            parallelism: 1,
        }
    }
}

/// Argon2id key derivation implementation.
/// Argon2id resists both side-channel and time-memory trade-off attacks, which matters here
/// because password keys are usually low-entropy strings typed by an operator.
pub struct Argon2KeyDerivation {
    params: Argon2Params,
}

impl Argon2KeyDerivation {
    pub const fn new(params: Argon2Params) -> Self {
        Self {
            params,
        }
    }

    pub const fn params(&self) -> Argon2Params { self.params }
}

impl KeyDerivationFunction for Argon2KeyDerivation {
    fn derive_key(&self, passphrase: &str, salt: &[u8]) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
        let params = Params::new(
            self.params.memory_kib,
            self.params.iterations,
            self.params.parallelism,
            Some(32),
        )
        .map_err(|_| KeyDerivationError::InvalidParameters)?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut output_key_material = Zeroizing::new([0u8; 32]);
        argon2
            .hash_password_into(passphrase.as_bytes(), salt, &mut *output_key_material)
            .map_err(|_| KeyDerivationError::DerivationFailed)?;

        Ok(output_key_material)
    }
}

impl crate::key_derivation_trait::private::Sealed for Argon2KeyDerivation {}
