/// Error type for all pwshield-crypto operations.
/// Every cipher, key derivation and envelope call returns it; none of them panic on bad input.
///
/// Security consideration: messages never carry key material, plaintext or ciphertext bytes.
/// Variants describe *what* went wrong structurally (bad header, failed tag check) and nothing
/// about the secret that was involved.
#[derive(thiserror::Error, Debug)]
pub enum CryptoError {
    /// A cipher was requested without a key
    #[error("Missing password key")]
    MissingKey,

    /// Errors related to encryption operations
    #[error("Encryption error")]
    Encryption,

    /// Errors related to decryption operations, including a failed authentication tag
    #[error("Decryption error")]
    Decryption,

    /// The ciphertext is not a well-formed envelope
    #[error("Malformed envelope: {reason}")]
    MalformedEnvelope {
        reason: &'static str,
    },

    /// The envelope was written by an unknown format version
    #[error("Unsupported envelope version: {0}")]
    UnsupportedVersion(u8),

    /// The envelope names an algorithm this build does not know
    #[error("Unknown algorithm identifier: {0}")]
    UnknownAlgorithm(u8),

    /// Errors related to key derivation
    #[error("Key derivation error: {0}")]
    KeyDerivation(#[from] KeyDerivationError),

    /// Decrypted bytes are not a UTF-8 password
    #[error("Decrypted data is not valid UTF-8")]
    InvalidUtf8,

    /// The ciphertext is not hex encoded
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Specific errors for key derivation operations
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum KeyDerivationError {
    /// The configured cost parameters are out of range
    #[error("Invalid key derivation parameters")]
    InvalidParameters,

    /// The KDF itself failed
    #[error("Key derivation failed")]
    DerivationFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_generic() {
        assert_eq!(CryptoError::Decryption.to_string(), "Decryption error");
        assert_eq!(
            CryptoError::from(KeyDerivationError::InvalidParameters).to_string(),
            "Key derivation error: Invalid key derivation parameters"
        );
        assert_eq!(
            CryptoError::MalformedEnvelope {
                reason: "truncated header",
            }
            .to_string(),
            "Malformed envelope: truncated header"
        );
    }

    #[test]
    fn test_hex_errors_convert() {
        let err = CryptoError::from(hex::FromHexError::OddLength);
        assert!(matches!(err, CryptoError::Hex(hex::FromHexError::OddLength)));
        assert_eq!(err.to_string(), "Hex decoding error: Odd number of digits");
    }
}
