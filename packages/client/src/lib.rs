#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP client for the Algolia Places query endpoint.
//!
//! [`SearchClient::search`] sends one `POST /1/places/query` request with
//! the [`SearchParameters`] as its JSON body and decodes the response into
//! a [`ResultSet`]. Authentication uses two headers, an application
//! identifier and an API key. Each is taken from the per-call
//! [`SearchParameters::credentials`] when set, otherwise from the
//! configured defaults, and is omitted when neither has a value.
//!
//! The client performs exactly one request per call: there are no retries,
//! no rate limiting and no timeout beyond the `reqwest` default.
//!
//! See <https://community.algolia.com/places/rest.html>

pub mod config;
pub mod service;

use places_search_places_models::{Credentials, ResultSet, SearchParameters};
use serde::Deserialize;
use thiserror::Error;

pub use config::{ClientConfig, credentials_from_env};

/// Errors from places search requests.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not a valid result set.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("Places service returned status {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message reported by the service, or the raw body.
        message: String,
    },
}

/// Error body returned by the service on failure.
#[derive(Deserialize)]
struct ServiceError {
    message: String,
}

/// Client for the places query endpoint.
///
/// Holds no mutable state; a single instance can serve concurrent
/// searches.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl SearchClient {
    /// Creates a client with its own HTTP connection pool.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Creates a client that shares an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_http_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Returns the configuration this client sends requests with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs a places query.
    ///
    /// # Errors
    ///
    /// * [`SearchError::Transport`] if the request cannot be sent or the
    ///   response body cannot be read
    /// * [`SearchError::Status`] if the service rejects the request
    ///   (including authentication failures)
    /// * [`SearchError::Decode`] if the response body is not a result set
    pub async fn search(&self, params: &SearchParameters) -> Result<ResultSet, SearchError> {
        let url = self.config.query_url();
        let credentials = resolve_credentials(params.credentials.as_ref(), &self.config.credentials);

        log::debug!("Querying places at {url}: {:?}", params.query);

        let mut req = self.client.post(&url).json(params);

        if let Some(app_id) = &credentials.application_id {
            req = req.header(self.config.app_id_header.as_str(), app_id);
        }
        if let Some(api_key) = &credentials.api_key {
            req = req.header(self.config.api_key_header.as_str(), api_key);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceError>(&body)
                .map_or(body, |err| err.message);
            log::warn!("Places query failed with status {status}: {message}");
            return Err(SearchError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let result: ResultSet = serde_json::from_str(&body)?;

        log::debug!(
            "Places query returned {} of {} hits in {}ms",
            result.hits.len(),
            result.nb_hits,
            result.processing_time_ms
        );

        Ok(result)
    }
}

/// Per-call credentials win over configured defaults, value by value.
fn resolve_credentials(per_call: Option<&Credentials>, defaults: &Credentials) -> Credentials {
    per_call.cloned().unwrap_or_default().merged_over(defaults)
}
