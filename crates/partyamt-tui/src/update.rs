//! Dashboard reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use partyamt_core::{filter_events, sort_catalog};
use tracing::debug;

use crate::common::{ListCursor, TaskKind};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{events, filter};
use crate::state::{AppState, Focus};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, &term_event),
        UiEvent::EventsLoaded { task, result } => {
            if !app.tasks.state_mut(TaskKind::EventList).finish_if_active(task) {
                debug!(?task, "ignoring stale event list result");
                return vec![];
            }
            app.events.settle(result);
            clamp_list(app);
            vec![]
        }
        UiEvent::TagsLoaded { task, result } => {
            if !app.tasks.state_mut(TaskKind::TagCatalog).finish_if_active(task) {
                debug!(?task, "ignoring stale tag catalog result");
                return vec![];
            }
            app.catalog.settle(result.map(sort_catalog));
            let len = app.catalog_tags().len();
            app.filter.nav.clamp(len);
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: &Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, *key),
        // Resize needs no state change; the next frame redraws at the new size.
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return quit(app),
        KeyCode::Char('q') | KeyCode::Esc => return quit(app),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            app.focus = app.focus.toggle();
            return vec![];
        }
        _ => {}
    }

    match app.focus {
        Focus::Filter => {
            let catalog = app.catalog.ready().map_or(&[][..], Vec::as_slice);
            if let Some(selection) = filter::handle_key(&mut app.filter, catalog, &app.selected, key)
            {
                debug!(selected = selection.len(), "tag selection changed");
                app.selected = selection;
                app.list.nav = ListCursor::default();
            }
            vec![]
        }
        Focus::Events => {
            let visible = app
                .events
                .ready()
                .map(|all| filter_events(all, &app.selected))
                .unwrap_or_default();
            events::handle_key(&mut app.list, &visible, key)
        }
    }
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    app.should_quit = true;
    vec![UiEffect::Quit]
}

fn clamp_list(app: &mut AppState) {
    let len = app.visible_events().len();
    app.list.nav.clamp(len);
}
