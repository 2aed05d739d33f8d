//! Dashboard command handler.

use anyhow::{Context, Result};
use partyamt_core::config::{self, Config};
use partyamt_core::logging;

pub fn run(config: &Config, endpoint: String) -> Result<()> {
    // The terminal belongs to the dashboard, so logs go to a file.
    let _guard = logging::init_file(&config::paths::logs_dir())?;

    partyamt_tui::run_dashboard(config, endpoint).context("dashboard failed")
}
