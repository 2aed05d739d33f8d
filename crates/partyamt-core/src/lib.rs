//! Core Partyamt library (data model, GraphQL client, filtering, config).

pub mod card;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod graphql;
pub mod logging;
pub mod model;

pub use card::{EventCard, Sentinels, format_price};
pub use catalog::sort_catalog;
pub use filter::{filter_events, matches_selection};
pub use graphql::{FetchError, GraphQlClient};
pub use model::{Event, Location, Tag, TagSet};
