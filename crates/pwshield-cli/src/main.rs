use std::process::ExitCode;

use tracing::error;

/// Argument parsing and top-level dispatch.
mod cli;
/// Subcommand handlers.
mod commands;
/// Tracing subscriber setup.
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "pwshield failed");
            ExitCode::FAILURE
        },
    }
}
