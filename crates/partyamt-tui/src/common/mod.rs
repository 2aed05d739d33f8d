//! Shared building blocks for the TUI (task lifecycle, load state, text).

pub mod cursor;
pub mod load;
pub mod task;
pub mod text;
pub mod theme;

pub use cursor::ListCursor;
pub use load::LoadState;
pub use task::{TaskId, TaskKind, TaskSeq, TaskState, Tasks};
pub use text::truncate_with_ellipsis;
