//! Client configuration and default credentials.
//!
//! Defaults come from the embedded service definition (see
//! [`crate::service`]). Credentials are read from the `ALGOLIA_APP_ID` and
//! `ALGOLIA_API_KEY` environment variables by [`ClientConfig::from_env`],
//! or passed in explicitly with [`ClientConfig::with_credentials`].

use places_search_places_models::Credentials;

use crate::service::{PlacesService, places_service};

/// Environment variable holding the default application identifier.
pub const APP_ID_ENV: &str = "ALGOLIA_APP_ID";

/// Environment variable holding the default API key.
pub const API_KEY_ENV: &str = "ALGOLIA_API_KEY";

/// Settings shared by every request a [`crate::SearchClient`] sends.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the service, without a trailing slash.
    pub base_url: String,
    /// Path of the query endpoint.
    pub query_path: String,
    /// Header carrying the application identifier.
    pub app_id_header: String,
    /// Header carrying the API key.
    pub api_key_header: String,
    /// Credentials used when a call does not override them.
    pub credentials: Credentials,
}

impl ClientConfig {
    /// Builds a configuration from a service definition, with no
    /// credentials.
    #[must_use]
    pub fn from_service(service: &PlacesService) -> Self {
        Self {
            base_url: service.endpoint.base_url.clone(),
            query_path: service.endpoint.query_path.clone(),
            app_id_header: service.auth.app_id_header.clone(),
            api_key_header: service.auth.api_key_header.clone(),
            credentials: Credentials::default(),
        }
    }

    /// Default configuration with credentials taken from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_credentials(credentials_from_env())
    }

    /// Points the client at a different host (e.g., a proxy).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the default credentials.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Full URL of the query endpoint.
    #[must_use]
    pub fn query_url(&self) -> String {
        format!("{}{}", self.base_url, self.query_path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_service(&places_service())
    }
}

/// Reads default credentials from [`APP_ID_ENV`] and [`API_KEY_ENV`].
///
/// Unset or empty variables leave the corresponding value unset.
#[must_use]
pub fn credentials_from_env() -> Credentials {
    Credentials {
        application_id: non_empty_var(APP_ID_ENV),
        api_key: non_empty_var(API_KEY_ENV),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
