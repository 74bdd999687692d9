use clap::Args;
use pwshield::{Diagnostics, PasswordService};
use pwshield_crypto::CipherFactory;

use super::KeyArgs;

/// Arguments for the encrypt command.
#[derive(Args)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// The cleartext password to protect.
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Encrypts the password, returning `None` when the key or password is blank.
pub fn encrypt<F, D>(service: &PasswordService<F, D>, args: &EncryptArgs) -> pwshield::Result<Option<String>>
where
    F: CipherFactory,
    D: Diagnostics,
{
    Ok(service.encrypt_with(&args.key.password_key(), args.password.as_deref())?)
}

/// Run the encrypt command, printing the ciphertext to stdout.
///
/// # Arguments
/// * `service` - The password service configured from the global flags.
/// * `args` - The parsed encrypt command arguments.
pub async fn run<F, D>(service: &PasswordService<F, D>, args: EncryptArgs) -> pwshield::Result<()>
where
    F: CipherFactory,
    D: Diagnostics,
{
    if let Some(ciphertext) = encrypt(service, &args)? {
        #[allow(clippy::print_stdout, reason = "CLI output")]
        {
            println!("{}", ciphertext);
        }
    }
    Ok(())
}
