//! Cursor over a vertical list.

use std::cell::Cell;

use crossterm::event::KeyCode;

/// Cursor and scroll offset for a list pane.
///
/// `cursor` is owned by the reducer. `offset` is the first visible row and is
/// written back by the renderer (ratatui adjusts it to keep the cursor in
/// view), so scrolling stays stable between frames.
#[derive(Debug, Default, Clone)]
pub struct ListCursor {
    pub cursor: usize,
    pub offset: Cell<usize>,
}

impl ListCursor {
    /// Applies a navigation key. Returns false if `code` is not a navigation key.
    pub fn handle_nav_key(&mut self, code: KeyCode, len: usize, page: usize) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor = (self.cursor + 1).min(len.saturating_sub(1));
            }
            KeyCode::PageUp => {
                self.cursor = self.cursor.saturating_sub(page);
            }
            KeyCode::PageDown => {
                self.cursor = (self.cursor + page).min(len.saturating_sub(1));
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = len.saturating_sub(1);
            }
            _ => return false,
        }
        true
    }

    /// Keeps the cursor inside a list of `len` items.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        if self.offset.get() > self.cursor {
            self.offset.set(self.cursor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut nav = ListCursor::default();

        assert!(nav.handle_nav_key(KeyCode::Up, 3, 5));
        assert_eq!(nav.cursor, 0);

        nav.handle_nav_key(KeyCode::Down, 3, 5);
        nav.handle_nav_key(KeyCode::Char('j'), 3, 5);
        nav.handle_nav_key(KeyCode::Down, 3, 5);
        assert_eq!(nav.cursor, 2);

        nav.handle_nav_key(KeyCode::PageUp, 3, 5);
        assert_eq!(nav.cursor, 0);

        nav.handle_nav_key(KeyCode::End, 3, 5);
        assert_eq!(nav.cursor, 2);
    }

    #[test]
    fn test_empty_list_keeps_cursor_at_zero() {
        let mut nav = ListCursor::default();
        nav.handle_nav_key(KeyCode::Down, 0, 5);
        nav.handle_nav_key(KeyCode::PageDown, 0, 5);
        assert_eq!(nav.cursor, 0);
    }

    #[test]
    fn test_non_navigation_key_ignored() {
        let mut nav = ListCursor::default();
        assert!(!nav.handle_nav_key(KeyCode::Char(' '), 3, 5));
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut nav = ListCursor {
            cursor: 7,
            offset: Cell::new(5),
        };

        nav.clamp(2);

        assert_eq!(nav.cursor, 1);
        assert_eq!(nav.offset.get(), 1);
    }
}
