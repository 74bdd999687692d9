use clap::Parser;

use crate::{
    commands::{run_command, Cli},
    logging::init_tracing,
};

/// Run the pwshield CLI application.
///
/// Parses command-line arguments, initializes tracing, and executes the requested command.
///
/// # Returns
/// Returns `Ok(())` on success. Protection failures, unreadable credentials files and
/// inconsistent file states are returned as errors.
pub async fn run() -> pwshield::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.json, cli.verbose);

    run_command(cli).await
}
