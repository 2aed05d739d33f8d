//! Event list reducer.

use crossterm::event::{KeyCode, KeyEvent};
use partyamt_core::Event;

use super::EventListState;
use crate::effects::UiEffect;

/// Cards moved by PageUp/PageDown.
const PAGE_SIZE: usize = 3;

/// Handles a key while the list has focus.
///
/// `visible` is the filtered list the cursor indexes into. Link keys act on
/// the card under the cursor: `Enter`/`o` event page, `c` calendar file,
/// `m` map, `w` venue website.
pub fn handle_key(list: &mut EventListState, visible: &[&Event], key: KeyEvent) -> Vec<UiEffect> {
    if list.nav.handle_nav_key(key.code, visible.len(), PAGE_SIZE) {
        return vec![];
    }

    let Some(event) = visible.get(list.nav.cursor) else {
        return vec![];
    };

    let url = match key.code {
        KeyCode::Enter | KeyCode::Char('o') => &event.url,
        KeyCode::Char('c') => &event.ics_link,
        KeyCode::Char('m') => &event.location.maps_link,
        KeyCode::Char('w') => &event.location.website,
        _ => return vec![],
    };

    if url.is_empty() {
        return vec![];
    }
    vec![UiEffect::OpenBrowser { url: url.clone() }]
}
