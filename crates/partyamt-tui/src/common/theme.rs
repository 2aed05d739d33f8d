//! Colors and styles shared by the dashboard panes.

use ratatui::style::{Color, Modifier, Style};

/// Brand blue used for the header and selected tags (#004569).
pub const BRAND: Color = Color::Rgb(0x00, 0x45, 0x69);

/// Header text color (#eeeeee).
pub const HEADER_TEXT: Color = Color::Rgb(0xee, 0xee, 0xee);

/// Unselected tag color (#888888).
pub const MUTED: Color = Color::Rgb(0x88, 0x88, 0x88);

pub fn border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn highlight() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn hint_key() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn hint_text() -> Style {
    Style::default().fg(Color::DarkGray)
}
