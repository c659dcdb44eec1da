//! hello-app entry point
//!
//! Prints the report on stdout. Command-line arguments are accepted and ignored.

use anyhow::{Context, Result};
use clap::Parser;
use std::ffi::OsString;

/// Prints a greeting and the result of adding 5 and 3
#[derive(Parser, Debug, Default)]
#[command(
    name = "hello-app",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    ignored: Vec<OsString>,
}

fn main() -> Result<()> {
    // Arguments never change the output, so a parse failure is treated as no arguments.
    let cli = Cli::try_parse().unwrap_or_default();

    hello_app::logging::init();
    if !cli.ignored.is_empty() {
        tracing::debug!("Ignoring {} command-line argument(s)", cli.ignored.len());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    hello_app::run(&mut out).context("Failed to write report to stdout")?;

    Ok(())
}
