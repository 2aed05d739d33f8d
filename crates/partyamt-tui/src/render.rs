//! Pure view/render functions for the dashboard.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame and never
//! return effects. List scroll offsets are the only values written back,
//! through `Cell`s on the view state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::common::{theme, truncate_with_ellipsis};
use crate::features::{events, filter};
use crate::state::{AppState, Focus};

/// Header bar height (title plus one row of padding above and below).
const HEADER_HEIGHT: u16 = 3;

/// Status area height: focused title and key hints.
const STATUS_HEIGHT: u16 = 2;

/// Width of the tag sidebar.
const SIDEBAR_WIDTH: u16 = 26;

const APP_TITLE: &str = "Partyamt";

/// Renders the whole dashboard to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    filter::render_filter_panel(
        frame,
        body[0],
        &app.catalog,
        &app.selected,
        &app.filter,
        app.focus == Focus::Filter,
    );
    events::render_event_list(frame, body[1], app, app.focus == Focus::Events);

    render_status(app, frame, chunks[2]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default().style(Style::default().bg(theme::BRAND));
    let inner = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            APP_TITLE,
            Style::default()
                .fg(theme::HEADER_TEXT)
                .bg(theme::BRAND)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        inner,
    );
}

/// First row: full title of the focused card, so titles cut in the card stay
/// readable. Second row: key hints for the focused pane.
fn render_status(app: &AppState, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let width = usize::from(area.width.saturating_sub(1));
    let title = app
        .focused_event()
        .filter(|_| app.focus == Focus::Events)
        .map(|event| truncate_with_ellipsis(&event.title, width))
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {title}"),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        rows[0],
    );

    let hints: &[(&str, &str)] = match app.focus {
        Focus::Filter => &[("↑↓", "move"), ("space", "toggle"), ("tab", "events"), ("q", "quit")],
        Focus::Events => &[
            ("↑↓", "move"),
            ("o", "open"),
            ("c", "calendar"),
            ("m", "map"),
            ("w", "website"),
            ("tab", "tags"),
            ("q", "quit"),
        ],
    };
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme::hint_key()));
        spans.push(Span::styled(format!(" {label}  "), theme::hint_text()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
}
