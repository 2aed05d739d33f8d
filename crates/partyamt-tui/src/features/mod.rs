//! Feature slices for the TUI (state/update/render per slice).

pub mod events;
pub mod filter;
