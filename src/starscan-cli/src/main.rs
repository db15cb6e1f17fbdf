//! Starscan CLI - entry point.
//!
//! Running with no subcommand opens the interactive TUI; subcommands
//! manage the stored session and replay recorded history.

use anyhow::Result;
use clap::Parser;

use starscan_cli::cli::{Cli, dispatch};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = starscan_cli::logging::init(cli.verbose)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starscan starting");
    dispatch(cli).await
}
