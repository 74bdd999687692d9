use clap::{Args, Parser, Subcommand, ValueEnum};
use pwshield::{PasswordKey, PasswordService};
use pwshield_crypto::{CryptoConfig, EncryptionAlgorithmChoice, KeyDerivationChoice};

/// Command handlers for the pwshield CLI.
///
/// Each submodule implements one subcommand on top of a shared [`PasswordService`].
/// Decrypt command module.
mod decrypt;
/// Encrypt command module.
mod encrypt;
/// Credentials file command module.
mod file;
/// Generate command module.
mod generate;

/// Environment variable consulted when `--key` is not given.
pub const KEY_ENV: &str = "PWSHIELD_PASSWORD_KEY";

/// Encryption algorithms selectable on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EncryptionAlgorithmArg {
    /// XChaCha20-Poly1305 (default).
    #[default]
    #[value(name = "xchacha20poly1305")]
    XChaCha20Poly1305,
    /// AES-256-GCM-SIV, nonce-misuse resistant.
    #[value(name = "aes256gcmsiv")]
    Aes256GcmSiv,
    /// AES-256-GCM.
    #[value(name = "aes256gcm")]
    Aes256Gcm,
}

impl From<EncryptionAlgorithmArg> for EncryptionAlgorithmChoice {
    fn from(arg: EncryptionAlgorithmArg) -> Self {
        match arg {
            EncryptionAlgorithmArg::XChaCha20Poly1305 => Self::XChaCha20Poly1305,
            EncryptionAlgorithmArg::Aes256GcmSiv => Self::Aes256GcmSiv,
            EncryptionAlgorithmArg::Aes256Gcm => Self::Aes256Gcm,
        }
    }
}

/// Key derivation functions selectable on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyDerivationArg {
    /// Argon2id with default memory and time costs (default).
    #[default]
    #[value(name = "argon2id")]
    Argon2id,
    /// PBKDF2-HMAC-SHA256 with the default iteration count.
    #[value(name = "pbkdf2")]
    Pbkdf2,
}

impl From<KeyDerivationArg> for KeyDerivationChoice {
    fn from(arg: KeyDerivationArg) -> Self {
        match arg {
            KeyDerivationArg::Argon2id => Self::default(),
            KeyDerivationArg::Pbkdf2 => Self::pbkdf2(),
        }
    }
}

/// The CLI for pwshield.
///
/// Protects individual passwords and whole credentials files with a password key. New
/// ciphertexts use the selected algorithms; decryption reads the algorithms from the
/// ciphertext itself, so the flags never need to match the ones used to encrypt.
#[derive(Parser)]
#[command(name = "pwshield", version)]
pub struct Cli {
    #[command(subcommand)]
    /// The subcommand to execute.
    pub command: Commands,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase verbosity (can be used multiple times: -v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Encryption algorithm used for new ciphertexts.
    #[arg(long, value_name = "ALGORITHM", value_enum, default_value_t, global = true)]
    pub encryption_algorithm: EncryptionAlgorithmArg,

    /// Key derivation algorithm used to turn the password key into a cipher key.
    #[arg(long, value_name = "ALGORITHM", value_enum, default_value_t, global = true)]
    pub key_derivation_algorithm: KeyDerivationArg,
}

impl Cli {
    /// The crypto configuration selected by the global flags.
    pub fn crypto_config(&self) -> CryptoConfig {
        CryptoConfig {
            encryption_algorithm: self.encryption_algorithm.into(),
            key_derivation:       self.key_derivation_algorithm.into(),
        }
    }
}

/// Enumeration of all available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a single password and print the ciphertext.
    ///
    /// Prints nothing when the key or the password is blank.
    Encrypt(encrypt::EncryptArgs),
    /// Decrypt a single ciphertext and print the password.
    ///
    /// Prints nothing when the ciphertext is blank.
    Decrypt(decrypt::DecryptArgs),
    /// Encrypt or decrypt every password in a credentials file.
    File(file::FileArgs),
    /// Generate a random password key.
    #[command(visible_alias = "gen")]
    Generate(generate::GenArgs),
}

/// The password key, shared by every command that needs one.
#[derive(Args, Clone, Default)]
pub struct KeyArgs {
    /// Password key. Falls back to the PWSHIELD_PASSWORD_KEY environment variable.
    #[arg(short, long, env = KEY_ENV, hide_env_values = true)]
    pub key: Option<String>,

    /// Name for the key, shown in logs and errors instead of the key itself.
    #[arg(long, value_name = "LABEL")]
    pub key_label: Option<String>,
}

impl KeyArgs {
    /// Builds the [`PasswordKey`]; a missing key becomes a blank one and is rejected by the
    /// service.
    pub fn password_key(&self) -> PasswordKey {
        let secret = self.key.clone().unwrap_or_default();
        match self.key_label {
            Some(ref label) => PasswordKey::labeled(label.clone(), secret),
            None => PasswordKey::new(secret),
        }
    }
}

/// Execute the specified CLI command.
///
/// Builds a [`PasswordService`] from the global algorithm flags and dispatches to the
/// command handler.
///
/// # Arguments
/// * `cli` - The parsed CLI arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or the first error a command hits.
pub async fn run_command(cli: Cli) -> pwshield::Result<()> {
    let service = PasswordService::with_config(cli.crypto_config());

    match cli.command {
        Commands::Encrypt(args) => encrypt::run(&service, args).await,
        Commands::Decrypt(args) => decrypt::run(&service, args).await,
        Commands::File(args) => file::run(&service, args).await,
        Commands::Generate(args) => generate::run(args).await,
    }
}

/// A service with cheap key derivation and no diagnostics output, for command tests.
#[cfg(test)]
fn test_service() -> PasswordService<pwshield_crypto::PassphraseCipherFactory, pwshield::SilentDiagnostics> {
    PasswordService::with_parts(
        pwshield_crypto::PassphraseCipherFactory::new(CryptoConfig {
            key_derivation: KeyDerivationChoice::Pbkdf2 {
                iterations: 1_000,
            },
            ..CryptoConfig::default()
        }),
        pwshield::SilentDiagnostics,
    )
}
