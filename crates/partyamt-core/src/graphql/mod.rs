//! GraphQL client for the Partyamt API.
//!
//! Two fixed read queries are supported: the event list and the tag catalog.
//! Both are plain `POST {"query": ...}` requests with no variables and no
//! authentication. There is no retry and no partial result: a response that
//! carries any GraphQL error is treated as a failure even if it also has data.

mod queries;
mod types;

pub use queries::{EVENTS_QUERY, TAGS_QUERY};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use types::{EventsData, QueryRequest, Response, TagsData};

use crate::model::{Event, Tag};

/// Standard User-Agent header for Partyamt API requests.
pub const USER_AGENT: &str = concat!("partyamt/", env!("CARGO_PKG_VERSION"));

/// Failure of a single query.
///
/// The dashboard collapses every variant into the same user-visible state;
/// the distinction is kept for logs and CLI output.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success HTTP status.
    #[error("server returned HTTP {0}")]
    Status(StatusCode),
    /// The server reported GraphQL errors.
    #[error("GraphQL error: {0}")]
    GraphQl(String),
    /// The body was not a valid response for the query.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The response had neither data nor errors.
    #[error("response contained no data")]
    MissingData,
}

/// Client for the Partyamt GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    endpoint: String,
    http: reqwest::Client,
}

impl GraphQlClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Panics
    /// In test builds, panics if `endpoint` is the production API so unit tests
    /// cannot reach the real service. Point tests at a wiremock server instead.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();

        #[cfg(test)]
        assert!(
            endpoint != crate::config::Config::DEFAULT_ENDPOINT,
            "Tests must not use the production Partyamt API (found {endpoint})"
        );

        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the full event list in server order.
    ///
    /// # Errors
    /// Returns a [`FetchError`] on transport, HTTP, GraphQL or decode failure.
    pub async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        let data: EventsData = self.query(EVENTS_QUERY).await?;
        Ok(data.events)
    }

    /// Fetches the catalog of known tags (unsorted, as served).
    ///
    /// # Errors
    /// Returns a [`FetchError`] on transport, HTTP, GraphQL or decode failure.
    pub async fn fetch_tags(&self) -> Result<Vec<Tag>, FetchError> {
        let data: TagsData = self.query(TAGS_QUERY).await?;
        Ok(data.tags)
    }

    async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, FetchError> {
        debug!(endpoint = %self.endpoint, "sending GraphQL query");

        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .json(&QueryRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let envelope: Response<T> = serde_json::from_str(&body)?;

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(FetchError::GraphQl(messages.join("; ")));
        }

        envelope.data.ok_or(FetchError::MissingData)
    }
}
