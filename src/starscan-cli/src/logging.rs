//! File-based diagnostic logging.
//!
//! Logs always go to a daily-rolled file under the data directory's
//! `logs/` folder, never to stdout: the TUI owns the terminal.

use anyhow::Result;
use starscan_storage::StarscanPaths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes tracing. The returned guard must stay alive for the
/// process lifetime or buffered log lines are lost.
pub fn init(verbose: bool) -> Result<WorkerGuard> {
    let paths = StarscanPaths::new()?;
    paths.ensure_dirs()?;

    let appender = tracing_appender::rolling::daily(paths.log_dir(), "starscan.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(guard)
}
