//! Compile-time service definition for the places endpoint.
//!
//! The endpoint URL and authentication header names live in
//! `services/algolia_places.toml`, which is embedded at compile time and
//! exposed through [`places_service`].

use serde::Deserialize;

/// A places search service definition loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesService {
    /// Unique identifier (e.g., `"algolia_places"`).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Where queries are sent.
    pub endpoint: EndpointConfig,
    /// Names of the authentication headers.
    pub auth: AuthHeaders,
}

/// Location of the query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
    /// Scheme and host (e.g., `"https://places-dsn.algolia.net"`).
    pub base_url: String,
    /// Path of the query endpoint, starting with `/`.
    pub query_path: String,
}

/// Header names used to authenticate requests.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthHeaders {
    /// Header carrying the application identifier.
    pub app_id_header: String,
    /// Header carrying the API key.
    pub api_key_header: String,
}

const PLACES_SERVICE_TOML: &str = include_str!("../services/algolia_places.toml");

/// Returns the embedded places service definition.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (this is a compile-time
/// guarantee since the config is embedded).
#[must_use]
pub fn places_service() -> PlacesService {
    toml::de::from_str(PLACES_SERVICE_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse places service definition: {e}"))
}
