//! Tracing setup.
//!
//! The dashboard owns the terminal, so it logs to a daily-rolling file under
//! `$PARTYAMT_HOME/logs`. Non-interactive commands log to stderr. Both read
//! their filter from `PARTYAMT_LOG` (e.g. `PARTYAMT_LOG=debug`).

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "PARTYAMT_LOG";

const LOG_FILE_PREFIX: &str = "partyamt.log";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs a stderr subscriber. Defaults to `warn` to keep command output clean.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("tracing init failed: {e}"))
}

/// Installs a file subscriber writing to `dir`. Defaults to `info`.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole session.
///
/// # Errors
/// Returns an error if the directory cannot be created or a global subscriber
/// is already installed.
pub fn init_file(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("tracing init failed: {e}"))?;

    Ok(guard)
}
