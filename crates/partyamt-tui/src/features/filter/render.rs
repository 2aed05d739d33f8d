//! Tag filter panel view.

use partyamt_core::{Tag, TagSet};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::FilterPanelState;
use crate::common::{LoadState, theme};

/// Renders the panel.
///
/// Pending and failed catalog loads render an empty panel: the catalog is a
/// navigation aid, so its failure stays silent.
pub fn render_filter_panel(
    frame: &mut Frame,
    area: Rect,
    catalog: &LoadState<Vec<Tag>>,
    selected: &TagSet,
    panel: &FilterPanelState,
    focused: bool,
) {
    let title = if selected.is_empty() {
        " Tags ".to_string()
    } else {
        format!(" Tags ({}) ", selected.len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border(focused))
        .title(title);

    let Some(tags) = catalog.ready() else {
        frame.render_widget(block, area);
        return;
    };

    let items: Vec<ListItem> = tags
        .iter()
        .map(|tag| ListItem::new(chip_line(tag, selected.contains(tag))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::highlight())
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_offset(panel.nav.offset.get());
    if focused && !tags.is_empty() {
        list_state.select(Some(panel.nav.cursor.min(tags.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
    panel.nav.offset.set(list_state.offset());
}

fn chip_line(tag: &Tag, checked: bool) -> Line<'static> {
    let (marker, style) = if checked {
        (
            "[x] ",
            Style::default()
                .fg(theme::BRAND)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ ] ", Style::default().fg(theme::MUTED))
    };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(tag.name().to_string(), style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{buffer_text, test_terminal};

    fn draw(catalog: &LoadState<Vec<Tag>>, selected: &TagSet) -> String {
        let mut terminal = test_terminal(24, 8);
        let panel = FilterPanelState::default();
        terminal
            .draw(|frame| {
                render_filter_panel(frame, frame.area(), catalog, selected, &panel, true);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_chips_with_check_state() {
        let catalog = LoadState::Ready(vec![Tag::new("Ambient"), Tag::new("Jazz")]);
        let selected: TagSet = ["Jazz"].into_iter().collect();

        let text = draw(&catalog, &selected);

        assert!(text.contains("[ ] Ambient"));
        assert!(text.contains("[x] Jazz"));
        assert!(text.contains("Tags (1)"));
    }

    #[test]
    fn test_failed_catalog_renders_empty_panel() {
        let text = draw(&LoadState::Failed("offline".to_string()), &TagSet::new());

        assert!(text.contains("Tags"));
        assert!(!text.contains("offline"));
        assert!(!text.contains("[ ]"));
    }
}
