//! Event list pane.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph};

use super::card_lines;
use crate::common::{LoadState, theme};
use crate::state::AppState;

/// Spinner frames for the loading placeholder.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Ticks per spinner frame.
const SPINNER_SPEED_DIVISOR: usize = 6;

const HIGHLIGHT_SYMBOL: &str = "▌ ";

/// Renders the list pane.
///
/// While loading or after a failure the pane shows a placeholder instead of
/// cards; it never shows stale cards next to an error.
pub fn render_event_list(frame: &mut Frame, area: Rect, app: &AppState, focused: bool) {
    let block = |title: String| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border(focused))
            .title(title)
    };

    let all = match &app.events {
        LoadState::Pending => {
            let frame_idx = (app.spinner_frame / SPINNER_SPEED_DIVISOR) % SPINNER_FRAMES.len();
            let text = format!("{} Loading events…", SPINNER_FRAMES[frame_idx]);
            render_placeholder(
                frame,
                area,
                block(" Events ".to_string()),
                text,
                Style::default().fg(Color::Green),
            );
            return;
        }
        LoadState::Failed(_) => {
            render_placeholder(
                frame,
                area,
                block(" Events ".to_string()),
                "Error".to_string(),
                Style::default().fg(Color::Red),
            );
            return;
        }
        LoadState::Ready(events) => events,
    };

    let visible = app.visible_events();
    let block = block(format!(" Events ({}/{}) ", visible.len(), all.len()));

    if visible.is_empty() {
        let text = if all.is_empty() {
            "No events."
        } else {
            "No events match the selected tags."
        };
        render_placeholder(frame, area, block, text.to_string(), theme::hint_text());
        return;
    }

    let width = usize::from(area.width.saturating_sub(2))
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
    let items: Vec<ListItem> = visible
        .iter()
        .map(|event| ListItem::new(Text::from(card_lines(&app.card_for(event), width))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut list_state = ListState::default().with_offset(app.list.nav.offset.get());
    list_state.select(Some(app.list.nav.cursor.min(visible.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
    app.list.nav.offset.set(list_state.offset());
}

fn render_placeholder(frame: &mut Frame, area: Rect, block: Block, text: String, style: Style) {
    let paragraph = Paragraph::new(Line::styled(text, style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use partyamt_core::config::Config;
    use partyamt_core::{Event, Location, Tag};

    use super::*;
    use crate::test_support::{buffer_text, test_terminal};

    fn event(title: &str, price: Option<f64>, tags: &[&str]) -> Event {
        Event {
            id: None,
            title: title.to_string(),
            price,
            ics_link: "https://ics".to_string(),
            url: "https://event".to_string(),
            location: Location {
                id: None,
                name: "Hall".to_string(),
                maps_link: String::new(),
                website: String::new(),
            },
            tags: tags.iter().copied().map(Tag::new).collect(),
        }
    }

    fn draw(app: &AppState) -> String {
        let mut terminal = test_terminal(40, 16);
        terminal
            .draw(|frame| render_event_list(frame, frame.area(), app, true))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_pending_shows_loading() {
        let app = AppState::new(&Config::default());

        assert!(draw(&app).contains("Loading events…"));
    }

    #[test]
    fn test_failed_shows_error_only() {
        let mut app = AppState::new(&Config::default());
        app.events = LoadState::Failed("HTTP 500".to_string());

        let text = draw(&app);
        assert!(text.contains("Error"));
        assert!(!text.contains("HTTP 500"));
    }

    #[test]
    fn test_ready_renders_cards_in_order() {
        let mut app = AppState::new(&Config::default());
        app.events = LoadState::Ready(vec![
            event("First", None, &["Jazz"]),
            event("Second", Some(5.0), &["Ab 18 Jahren", "Techno"]),
        ]);

        let text = draw(&app);
        let first = text.find("First").unwrap();
        let second = text.find("[18+] Second").unwrap();
        assert!(first < second);
        assert!(text.contains("Free"));
        assert!(text.contains("5.00€"));
        assert!(text.contains("#Techno"));
        assert!(!text.contains("#Ab 18 Jahren"));
        assert!(text.contains("Events (2/2)"));
    }

    #[test]
    fn test_no_matches_message() {
        let mut app = AppState::new(&Config::default());
        app.events = LoadState::Ready(vec![event("First", None, &["Jazz"])]);
        app.selected = ["Techno"].into_iter().collect();

        let text = draw(&app);
        assert!(text.contains("No events match the selected tags."));
        assert!(text.contains("Events (0/1)"));
    }
}
