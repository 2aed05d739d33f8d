//! Tag filter panel reducer.

use crossterm::event::{KeyCode, KeyEvent};
use partyamt_core::{Tag, TagSet};

use super::FilterPanelState;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Handles a key while the panel has focus.
///
/// `catalog` is the list in display order. Returns the whole new selection
/// when the key toggled a tag, `None` otherwise.
pub fn handle_key(
    panel: &mut FilterPanelState,
    catalog: &[Tag],
    selected: &TagSet,
    key: KeyEvent,
) -> Option<TagSet> {
    if panel.nav.handle_nav_key(key.code, catalog.len(), PAGE_SIZE) {
        return None;
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => catalog
            .get(panel.nav.cursor)
            .map(|tag| selected.toggled(tag)),
        _ => None,
    }
}
