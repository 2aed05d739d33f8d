//! Effect handlers for the dashboard runtime.
//!
//! Handlers are pure async functions that return a `UiEvent`. The runtime
//! spawns them and forwards the result to the inbox. Errors are flattened to
//! strings here: the dashboard only ever shows that a query failed, while the
//! log keeps the detail.

use partyamt_core::GraphQlClient;
use tracing::{info, warn};

use crate::common::TaskId;
use crate::events::UiEvent;

/// Runs the event list query.
pub async fn fetch_events(client: GraphQlClient, task: TaskId) -> UiEvent {
    let result = match client.fetch_events().await {
        Ok(events) => {
            info!(count = events.len(), "event list loaded");
            Ok(events)
        }
        Err(e) => {
            warn!(error = %e, endpoint = client.endpoint(), "event list query failed");
            Err(e.to_string())
        }
    };
    UiEvent::EventsLoaded { task, result }
}

/// Runs the tag catalog query.
pub async fn fetch_tags(client: GraphQlClient, task: TaskId) -> UiEvent {
    let result = match client.fetch_tags().await {
        Ok(tags) => {
            info!(count = tags.len(), "tag catalog loaded");
            Ok(tags)
        }
        Err(e) => {
            warn!(error = %e, endpoint = client.endpoint(), "tag catalog query failed");
            Err(e.to_string())
        }
    };
    UiEvent::TagsLoaded { task, result }
}
