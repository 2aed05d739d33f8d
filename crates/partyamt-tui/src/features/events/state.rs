//! Event list state.

use crate::common::ListCursor;

/// Cursor over the filtered event list.
///
/// The cursor indexes the filtered list, so it is reset whenever the
/// selection changes.
#[derive(Debug, Default, Clone)]
pub struct EventListState {
    pub nav: ListCursor,
}
