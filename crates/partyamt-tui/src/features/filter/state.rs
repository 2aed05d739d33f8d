//! Tag filter panel state.

use crate::common::ListCursor;

/// Cursor over the tag catalog.
#[derive(Debug, Default, Clone)]
pub struct FilterPanelState {
    pub nav: ListCursor,
}
