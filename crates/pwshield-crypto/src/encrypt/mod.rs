pub mod aes_gcm;
pub mod aes_gcm_siv;
pub mod keygen;
pub mod xchacha20_poly1305;

pub use aes_gcm::Aes256GcmEncryptor;
pub use aes_gcm_siv::Aes256GcmSivEncryptor;
pub use keygen::generate_password_key;
pub use xchacha20_poly1305::XChaCha20Poly1305Encryptor;
