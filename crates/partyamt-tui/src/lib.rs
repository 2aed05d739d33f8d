//! Full-screen Partyamt dashboard.
//!
//! Elm-style layout: `update` is the only place state changes, `render` is a
//! pure view of `AppState`, and `runtime` executes the effects the reducer
//! returns.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

#[cfg(test)]
mod test_support;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use partyamt_core::config::Config;
pub use runtime::TuiRuntime;

/// Runs the dashboard until the user quits.
///
/// Must be called from within a multi-threaded tokio runtime: the queries
/// run on spawned tasks while this call blocks driving the terminal.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub fn run_dashboard(config: &Config, endpoint: String) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The dashboard requires a terminal.\n\
             Use `partyamt events` for plain text output."
        );
    }

    let mut runtime = TuiRuntime::new(config, endpoint)?;
    runtime.run()
}
