use clap::{Args, Subcommand};
use zeroize::Zeroizing;

use super::KEY_ENV;

/// Arguments for the gen command.
#[derive(Args)]
pub struct GenArgs {
    #[command(subcommand)]
    pub subcommand: GenCommands,
}

#[derive(Subcommand)]
pub enum GenCommands {
    /// Generate a password key: 32 random bytes as hex.
    Key(KeyArgs),
}

#[derive(Args)]
pub struct KeyArgs {
    /// Print a shell `export` line for PWSHIELD_PASSWORD_KEY instead of the bare key.
    #[arg(long)]
    pub shell: bool,
}

/// Formats a freshly generated key for output. The line is wiped once printed.
fn render_key(args: &KeyArgs) -> Zeroizing<String> {
    let key = pwshield_crypto::generate_password_key();
    if args.shell {
        Zeroizing::new(format!("export {}={}", KEY_ENV, key.as_str()))
    }
    else {
        key
    }
}

/// Run the gen command.
pub async fn run(args: GenArgs) -> pwshield::Result<()> {
    match args.subcommand {
        GenCommands::Key(args) => {
            let line = render_key(&args);
            #[allow(clippy::print_stdout, reason = "CLI output")]
            {
                println!("{}", line.as_str());
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_key_is_hex() {
        let line: Zeroizing<String> = render_key(&KeyArgs {
            shell: false,
        });
        assert_eq!(line.len(), 64);
        assert!(line.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_shell_export_line() {
        let line = render_key(&KeyArgs {
            shell: true,
        });
        let key = line.strip_prefix("export PWSHIELD_PASSWORD_KEY=").unwrap();
        assert_eq!(key.len(), 64);
    }

    #[test]
    fn test_run_gen_key() {
        let args = GenArgs {
            subcommand: GenCommands::Key(KeyArgs {
                shell: false,
            }),
        };
        let result = tokio::runtime::Runtime::new().unwrap().block_on(run(args));
        assert!(result.is_ok());
    }
}
