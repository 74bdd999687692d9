//! Self-describing byte layout of a protected password.
//!
//! ```text
//! version(1) | aead id(1) | kdf id(1) | kdf params | salt(16) | nonce | ciphertext+tag
//! ```
//!
//! Argon2id params are `m_cost`, `t_cost`, `p_cost` as big-endian `u32`s; PBKDF2 params are the
//! iteration count as a big-endian `u32`. The nonce length depends on the AEAD.

use crate::{
    error::CryptoError,
    key_derivation::Argon2Params,
    EncryptionAlgorithmChoice,
    KeyDerivationChoice,
};

/// Current envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Length of the per-envelope KDF salt.
pub const SALT_LEN: usize = 16;

/// Largest Argon2 memory cost accepted from an envelope (256 MiB).
pub const MAX_ARGON2_MEMORY_KIB: u32 = 262_144;

/// Largest Argon2 pass count accepted from an envelope.
pub const MAX_ARGON2_ITERATIONS: u32 = 10;

/// Largest Argon2 lane count accepted from an envelope.
pub const MAX_ARGON2_PARALLELISM: u32 = 16;

/// Largest Argon2 total work (memory in KiB times passes) accepted from an envelope, four
/// times the 256 MiB single-pass cost.
pub const MAX_ARGON2_WORK_KIB: u64 = 1_048_576;

/// Largest PBKDF2 iteration count accepted from an envelope, four times the default.
pub const MAX_PBKDF2_ITERATIONS: u32 = 2_400_000;

/// A parsed (or about-to-be-written) envelope. Borrows its variable-length parts.
#[derive(Debug, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub encryption:     EncryptionAlgorithmChoice,
    pub key_derivation: KeyDerivationChoice,
    pub salt:           &'a [u8],
    pub sealed:         &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Serializes the envelope into its binary layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = vec![
            ENVELOPE_VERSION,
            self.encryption.id(),
            self.key_derivation.id(),
        ];
        match self.key_derivation {
            KeyDerivationChoice::Argon2id(params) => {
                out.extend_from_slice(&params.memory_kib.to_be_bytes());
                out.extend_from_slice(&params.iterations.to_be_bytes());
                out.extend_from_slice(&params.parallelism.to_be_bytes());
            },
            KeyDerivationChoice::Pbkdf2 {
                iterations,
            } => out.extend_from_slice(&iterations.to_be_bytes()),
        }
        out.extend_from_slice(self.salt);
        out.extend_from_slice(self.sealed);
        out
    }

    /// Parses an envelope, validating the header but not the sealed payload.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, CryptoError> {
        let mut rest = bytes;

        let version = take_u8(&mut rest)?;
        if version != ENVELOPE_VERSION {
            return Err(CryptoError::UnsupportedVersion(version));
        }
        let encryption = EncryptionAlgorithmChoice::from_id(take_u8(&mut rest)?)?;
        let key_derivation = match take_u8(&mut rest)? {
            1 => {
                KeyDerivationChoice::Argon2id(Argon2Params {
                    memory_kib:  take_u32(&mut rest)?,
                    iterations:  take_u32(&mut rest)?,
                    parallelism: take_u32(&mut rest)?,
                })
            },
            2 => {
                KeyDerivationChoice::Pbkdf2 {
                    iterations: take_u32(&mut rest)?,
                }
            },
            other => return Err(CryptoError::UnknownAlgorithm(other)),
        };
        if !within_budget(&key_derivation) {
            return Err(CryptoError::MalformedEnvelope {
                reason: "key derivation cost out of range",
            });
        }
        let salt = take(&mut rest, SALT_LEN)?;

        if rest.is_empty() {
            return Err(CryptoError::MalformedEnvelope {
                reason: "missing sealed payload",
            });
        }

        Ok(Self {
            encryption,
            key_derivation,
            salt,
            sealed: rest,
        })
    }
}

/// Whether the key derivation costs fit the budget accepted when opening an envelope.
pub const fn within_budget(choice: &KeyDerivationChoice) -> bool {
    match *choice {
        KeyDerivationChoice::Argon2id(params) => {
            let work = (params.memory_kib as u64).saturating_mul(params.iterations as u64);
            params.memory_kib <= MAX_ARGON2_MEMORY_KIB &&
                params.iterations <= MAX_ARGON2_ITERATIONS &&
                params.parallelism <= MAX_ARGON2_PARALLELISM &&
                work <= MAX_ARGON2_WORK_KIB
        },
        KeyDerivationChoice::Pbkdf2 {
            iterations,
        } => iterations <= MAX_PBKDF2_ITERATIONS,
    }
}

fn take<'a>(rest: &mut &'a [u8], len: usize) -> Result<&'a [u8], CryptoError> {
    let (head, tail) = rest
        .split_at_checked(len)
        .ok_or(CryptoError::MalformedEnvelope {
            reason: "truncated header",
        })?;
    *rest = tail;
    Ok(head)
}

fn take_u8(rest: &mut &[u8]) -> Result<u8, CryptoError> {
    let byte = take(rest, 1)?;
    byte.first().copied().ok_or(CryptoError::MalformedEnvelope {
        reason: "truncated header",
    })
}

fn take_u32(rest: &mut &[u8]) -> Result<u32, CryptoError> {
    let bytes: [u8; 4] = take(rest, 4)?
        .try_into()
        .map_err(|_| {
            CryptoError::MalformedEnvelope {
                reason: "truncated header",
            }
        })?;
    Ok(u32::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argon2_layout() {
        let salt = [0xAAu8; SALT_LEN];
        let envelope = Envelope {
            encryption:     EncryptionAlgorithmChoice::Aes256Gcm,
            key_derivation: KeyDerivationChoice::Argon2id(Argon2Params {
                memory_kib:  256,
                iterations:  3,
                parallelism: 1,
            }),
            salt:           &salt,
            sealed:         &[1, 2, 3],
        };
        let bytes = envelope.to_bytes();
        assert_eq!(&bytes[.. 3], &[1, 3, 1]);
        assert_eq!(&bytes[3 .. 7], &256u32.to_be_bytes());
        assert_eq!(bytes.len(), 3 + 12 + SALT_LEN + 3);
        assert_eq!(Envelope::parse(&bytes).unwrap(), envelope);
    }

    #[test]
    fn test_pbkdf2_layout() {
        let salt = [0x55u8; SALT_LEN];
        let envelope = Envelope {
            encryption:     EncryptionAlgorithmChoice::XChaCha20Poly1305,
            key_derivation: KeyDerivationChoice::Pbkdf2 {
                iterations: 1000,
            },
            salt:           &salt,
            sealed:         &[9; 40],
        };
        let bytes = envelope.to_bytes();
        assert_eq!(bytes.len(), 3 + 4 + SALT_LEN + 40);
        assert_eq!(Envelope::parse(&bytes).unwrap(), envelope);
    }

    #[test]
    fn test_parse_rejects_bad_headers() {
        assert!(matches!(
            Envelope::parse(&[]),
            Err(CryptoError::MalformedEnvelope { .. })
        ));
        assert!(matches!(
            Envelope::parse(&[2, 1, 1]),
            Err(CryptoError::UnsupportedVersion(2))
        ));
        assert!(matches!(
            Envelope::parse(&[1, 9, 1]),
            Err(CryptoError::UnknownAlgorithm(9))
        ));
        assert!(matches!(
            Envelope::parse(&[1, 1, 7]),
            Err(CryptoError::UnknownAlgorithm(7))
        ));
        assert!(matches!(
            Envelope::parse(&[1, 1, 2, 0, 0]),
            Err(CryptoError::MalformedEnvelope { .. })
        ));
    }

    fn argon2_header(memory_kib: u32, iterations: u32, parallelism: u32) -> Vec<u8> {
        let mut bytes = vec![1, 1, 1];
        bytes.extend_from_slice(&memory_kib.to_be_bytes());
        bytes.extend_from_slice(&iterations.to_be_bytes());
        bytes.extend_from_slice(&parallelism.to_be_bytes());
        bytes.extend_from_slice(&[0u8; SALT_LEN + 40]);
        bytes
    }

    fn is_over_budget(bytes: &[u8]) -> bool {
        matches!(
            Envelope::parse(bytes),
            Err(CryptoError::MalformedEnvelope {
                reason: "key derivation cost out of range"
            })
        )
    }

    #[test]
    fn test_parse_rejects_excessive_costs() {
        let mut pbkdf2 = vec![1, 1, 2];
        pbkdf2.extend_from_slice(&(MAX_PBKDF2_ITERATIONS + 1).to_be_bytes());
        pbkdf2.extend_from_slice(&[0u8; SALT_LEN + 40]);
        assert!(is_over_budget(&pbkdf2));

        assert!(is_over_budget(&argon2_header(MAX_ARGON2_MEMORY_KIB + 1, 1, 1)));
        assert!(is_over_budget(&argon2_header(1024, MAX_ARGON2_ITERATIONS + 1, 1)));
        assert!(is_over_budget(&argon2_header(1024, 2, MAX_ARGON2_PARALLELISM + 1)));
        assert!(is_over_budget(&argon2_header(1 << 30, 10_000_000, 1)));
        // Each cap alone is fine, the product is not.
        assert!(is_over_budget(&argon2_header(MAX_ARGON2_MEMORY_KIB, MAX_ARGON2_ITERATIONS, 1)));
    }

    #[test]
    fn test_parse_accepts_budgeted_costs() {
        assert!(Envelope::parse(&argon2_header(19_456, 2, 1)).is_ok());
        assert!(Envelope::parse(&argon2_header(MAX_ARGON2_MEMORY_KIB, 4, 4)).is_ok());

        let mut pbkdf2 = vec![1, 1, 2];
        pbkdf2.extend_from_slice(&600_000u32.to_be_bytes());
        pbkdf2.extend_from_slice(&[0u8; SALT_LEN + 40]);
        assert!(Envelope::parse(&pbkdf2).is_ok());
    }

    #[test]
    fn test_parse_requires_payload() {
        let mut bytes = vec![1, 1, 2, 0, 0, 3, 232];
        bytes.extend_from_slice(&[0u8; SALT_LEN]);
        assert!(matches!(
            Envelope::parse(&bytes),
            Err(CryptoError::MalformedEnvelope {
                reason: "missing sealed payload"
            })
        ));
    }
}
