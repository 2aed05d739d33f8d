//! GraphQL wire types.

use serde::{Deserialize, Serialize};

use crate::model::{Event, Tag};

/// Request body for a variable-free query.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct EventsData {
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct TagsData {
    pub tags: Vec<Tag>,
}
