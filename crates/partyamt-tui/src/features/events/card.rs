//! Event card lines.

use partyamt_core::EventCard;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::common::{theme, truncate_with_ellipsis};

/// Rows one card occupies, including the spacer row.
pub const CARD_HEIGHT: usize = 5;

const ADULTS_BADGE: &str = "[18+] ";

/// Renders a card as fixed-height lines fitting `width` columns.
///
/// The title is cut with an ellipsis when it does not fit; the status line
/// shows it in full for the focused card.
pub fn card_lines(card: &EventCard, width: usize) -> Vec<Line<'static>> {
    let mut title = Vec::new();
    let mut title_width = width;
    if card.adults_only {
        title.push(Span::styled(
            ADULTS_BADGE,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ));
        title_width = title_width.saturating_sub(ADULTS_BADGE.width());
    }
    title.push(Span::styled(
        truncate_with_ellipsis(&card.title, title_width),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    let meta = Line::from(vec![
        Span::styled("[cal] ", link_style(&card.ics_link)),
        Span::styled(card.price.clone(), Style::default().fg(Color::Yellow)),
    ]);

    let location = Line::from(vec![
        Span::styled("[web] ", link_style(&card.website)),
        Span::styled(
            card.location_name.clone(),
            link_style(&card.maps_link).add_modifier(Modifier::UNDERLINED),
        ),
    ]);

    let mut badges = Vec::new();
    for (i, tag) in card.visible_tags.iter().enumerate() {
        if i > 0 {
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(
            format!("#{}", tag.name()),
            Style::default().fg(theme::MUTED),
        ));
    }

    vec![
        Line::from(title),
        meta,
        location,
        Line::from(badges),
        Line::default(),
    ]
}

/// Links without a target are dimmed.
fn link_style(url: &str) -> Style {
    if url.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    }
}
