//! UI events consumed by the reducer.

use crossterm::event::Event;
use partyamt_core::{Event as PartyEvent, Tag};

use crate::common::TaskId;

/// Everything that can change state.
///
/// Terminal input, timer ticks, and results of async fetches all funnel
/// through this enum into `update::update`.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick (spinner animation, render cadence).
    Tick,
    /// Terminal input.
    Terminal(Event),
    /// Event list query finished.
    EventsLoaded {
        task: TaskId,
        result: Result<Vec<PartyEvent>, String>,
    },
    /// Tag catalog query finished.
    TagsLoaded {
        task: TaskId,
        result: Result<Vec<Tag>, String>,
    },
}
