//! Application state composition.
//!
//! `AppState` is the root shell of the dashboard. It owns the selected-tag
//! set for the whole session and the two independent query results:
//!
//! ```text
//! AppState
//! ├── selected: TagSet              (user's tag filter, starts empty)
//! ├── events: LoadState<Vec<Event>> (event list query)
//! ├── catalog: LoadState<Vec<Tag>>  (tag catalog query, display order)
//! ├── filter: FilterPanelState      (panel cursor)
//! ├── list: EventListState          (list cursor)
//! ├── focus: Focus
//! ├── task_seq / tasks              (fetch lifecycle)
//! └── sentinels / currency_suffix   (card display settings)
//! ```
//!
//! The selection is passed down to the panel and list as a read value; the
//! panel hands back a complete new set, which only the reducer stores.

use partyamt_core::config::Config;
use partyamt_core::{Event, EventCard, Sentinels, Tag, TagSet, filter_events};

use crate::common::{LoadState, TaskKind, TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::features::events::EventListState;
use crate::features::filter::FilterPanelState;

/// Pane that receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Filter,
    #[default]
    Events,
}

impl Focus {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Focus::Filter => Focus::Events,
            Focus::Events => Focus::Filter,
        }
    }
}

/// Dashboard state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Pane receiving navigation keys.
    pub focus: Focus,
    /// Tags the user filters by. Empty means "show everything".
    pub selected: TagSet,
    /// Event list query result.
    pub events: LoadState<Vec<Event>>,
    /// Tag catalog query result, already in display order.
    pub catalog: LoadState<Vec<Tag>>,
    /// Tag filter panel view state.
    pub filter: FilterPanelState,
    /// Event list view state.
    pub list: EventListState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Tag names with special rendering meaning.
    pub sentinels: Sentinels,
    /// Suffix appended to non-free prices.
    pub currency_suffix: String,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            selected: TagSet::new(),
            events: LoadState::Pending,
            catalog: LoadState::Pending,
            filter: FilterPanelState::default(),
            list: EventListState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            sentinels: config.sentinels.clone(),
            currency_suffix: config.display.currency_suffix.clone(),
            spinner_frame: 0,
        }
    }

    /// Starts both queries. Called once when the page view opens.
    pub fn start_fetches(&mut self) -> Vec<UiEffect> {
        let events_task = self.task_seq.next_id();
        self.tasks
            .state_mut(TaskKind::EventList)
            .on_started(events_task);

        let tags_task = self.task_seq.next_id();
        self.tasks
            .state_mut(TaskKind::TagCatalog)
            .on_started(tags_task);

        vec![
            UiEffect::FetchEvents { task: events_task },
            UiEffect::FetchTags { task: tags_task },
        ]
    }

    /// Events passing the current selection, in source order.
    ///
    /// Recomputed on every call so the list always reflects the latest
    /// selection and the latest fetched collection.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.events
            .ready()
            .map(|events| filter_events(events, &self.selected))
            .unwrap_or_default()
    }

    /// The event under the list cursor, if any.
    pub fn focused_event(&self) -> Option<&Event> {
        self.visible_events().get(self.list.nav.cursor).copied()
    }

    /// Card values for an event using the configured sentinels and currency.
    pub fn card_for(&self, event: &Event) -> EventCard {
        EventCard::with_currency(event, &self.sentinels, &self.currency_suffix)
    }

    /// Catalog tags in display order; empty unless the catalog loaded.
    pub fn catalog_tags(&self) -> &[Tag] {
        self.catalog.ready().map_or(&[], Vec::as_slice)
    }
}
