use zeroize::Zeroizing;

/// Generates a fresh random password key: 256 bits of OS randomness, hex encoded.
///
/// Any non-blank string works as a password key; this just gives operators one with full
/// entropy so the KDF cost is not the only thing standing between an attacker and the file.
pub fn generate_password_key() -> Zeroizing<String> {
    let bytes = Zeroizing::new(rand::random::<[u8; 32]>());
    Zeroizing::new(hex::encode(bytes.as_slice()))
}
