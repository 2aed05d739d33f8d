//! Tag filter panel feature slice.
//!
//! Shows the tag catalog as checkable chips. Toggling a chip produces the
//! complete new selection, which the reducer stores on the root state. The
//! panel never keeps its own copy of the selection.
//!
//! ## Module Structure
//!
//! - `state.rs`: `FilterPanelState` (cursor over the catalog)
//! - `update.rs`: key handling, returns the new selection on toggle
//! - `render.rs`: chip list rendering

mod render;
mod state;
mod update;

pub use render::render_filter_panel;
pub use state::FilterPanelState;
pub use update::handle_key;
