use std::path::PathBuf;

use clap::{Args, Subcommand};
use pwshield::{CredentialsFile, Diagnostics, PasswordService};
use pwshield_crypto::CipherFactory;
use tracing::info;

use super::KeyArgs;

/// Arguments for the file command.
#[derive(Args)]
pub struct FileArgs {
    #[command(subcommand)]
    /// The file subcommand to execute.
    pub subcommand: FileCommands,
}

/// Enumeration of file subcommands.
#[derive(Subcommand)]
pub enum FileCommands {
    /// Encrypt every connection password in a credentials file.
    Encrypt(TransformArgs),
    /// Decrypt every connection password in a credentials file.
    Decrypt(TransformArgs),
}

/// Arguments shared by `file encrypt` and `file decrypt`.
#[derive(Args)]
pub struct TransformArgs {
    /// Path to the JSON credentials file.
    pub path: PathBuf,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Write the result here instead of rewriting the input file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Run the file command.
///
/// The file is loaded, transformed in memory and only written back once every password has
/// been converted, so a wrong key leaves it untouched.
///
/// # Returns
/// `InconsistentState` if the file is already in the requested state, `MissingKey` if no key
/// was given, `Protection` if a password fails to convert, or an I/O or JSON error.
pub async fn run<F, D>(service: &PasswordService<F, D>, args: FileArgs) -> pwshield::Result<()>
where
    F: CipherFactory,
    D: Diagnostics,
{
    let (args, encrypt) = match args.subcommand {
        FileCommands::Encrypt(args) => (args, true),
        FileCommands::Decrypt(args) => (args, false),
    };

    let key = args.key.password_key();
    let mut file = CredentialsFile::load(&args.path).await?;
    let count = if encrypt {
        file.encrypt_passwords(service, &key)?
    }
    else {
        file.decrypt_passwords(service, &key)?
    };

    let output = args.output.unwrap_or(args.path);
    file.save(&output).await?;
    info!(
        count,
        encrypted = file.encrypted_passwords,
        "Credentials file written to {}",
        output.display()
    );
    Ok(())
}
