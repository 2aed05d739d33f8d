//! Tag filtering for the event list.
//!
//! Selection is an OR over tags: with nothing selected every event is shown,
//! otherwise an event is shown if it carries at least one selected tag.

use crate::model::{Event, TagSet};

/// Returns true if `event` passes the current tag selection.
pub fn matches_selection(event: &Event, selected: &TagSet) -> bool {
    selected.is_empty() || selected.intersects(&event.tags)
}

/// Filters `events` by `selected`, preserving source order.
pub fn filter_events<'a>(events: &'a [Event], selected: &TagSet) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| matches_selection(event, selected))
        .collect()
}
