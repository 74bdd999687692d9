pub mod argon2;
pub mod pbkdf2;

pub use argon2::{Argon2KeyDerivation, Argon2Params};
pub use pbkdf2::{Pbkdf2KeyDerivation, DEFAULT_PBKDF2_ITERATIONS};
