use clap::Args;
use pwshield::{Diagnostics, PasswordService};
use pwshield_crypto::CipherFactory;

use super::KeyArgs;

/// Arguments for the decrypt command.
#[derive(Args)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// The hex ciphertext produced by `pwshield encrypt`.
    #[arg(long, value_name = "CIPHERTEXT")]
    pub value: Option<String>,
}

/// Decrypts the value, returning `None` when it is blank.
pub fn decrypt<F, D>(service: &PasswordService<F, D>, args: &DecryptArgs) -> pwshield::Result<Option<String>>
where
    F: CipherFactory,
    D: Diagnostics,
{
    Ok(service.decrypt_with(&args.key.password_key(), args.value.as_deref())?)
}

/// Run the decrypt command, printing the password to stdout.
///
/// # Arguments
/// * `service` - The password service configured from the global flags.
/// * `args` - The parsed decrypt command arguments.
///
/// # Returns
/// A `Protection` error when the key is missing or wrong, or the ciphertext is damaged.
pub async fn run<F, D>(service: &PasswordService<F, D>, args: DecryptArgs) -> pwshield::Result<()>
where
    F: CipherFactory,
    D: Diagnostics,
{
    if let Some(password) = decrypt(service, &args)? {
        #[allow(clippy::print_stdout, reason = "CLI output")]
        {
            println!("{}", password);
        }
    }
    Ok(())
}
