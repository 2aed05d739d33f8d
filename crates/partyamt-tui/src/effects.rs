//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Run the event list query.
    FetchEvents { task: TaskId },

    /// Run the tag catalog query.
    FetchTags { task: TaskId },

    /// Open a URL in the system browser.
    OpenBrowser { url: String },
}
