//! Event list feature slice.
//!
//! Combines the fetched events with the current tag selection and renders
//! one card per matching event, in server order.
//!
//! ## Module Structure
//!
//! - `state.rs`: `EventListState` (cursor over the filtered list)
//! - `update.rs`: navigation and link-opening keys
//! - `card.rs`: one event card as styled lines
//! - `render.rs`: list pane rendering (loading / error / cards)

mod card;
mod render;
mod state;
mod update;

pub use card::{CARD_HEIGHT, card_lines};
pub use render::render_event_list;
pub use state::EventListState;
pub use update::handle_key;
