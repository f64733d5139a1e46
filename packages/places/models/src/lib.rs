#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request, response and address types for the places search client.
//!
//! The wire types ([`SearchParameters`], [`ResultSet`], [`Hit`]) mirror the
//! JSON exchanged with the Algolia Places `/1/places/query` endpoint. A hit
//! is polymorphic: depending on whether it describes a country, a city, a
//! suburb or a street, a different subset of its name-bearing fields is
//! populated. [`PlaceKind`] is the tagged view of the raw category flags and
//! [`Address`] is the flat shape that hits are resolved into.
//!
//! This crate contains only data types and simple accessors. It has no
//! HTTP or I/O dependencies.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display};

/// Locale key used for the fallback name in locale-keyed mappings.
pub const DEFAULT_LOCALE: &str = "default";

/// Query parameters sent as the JSON body of a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    /// Free-text query (e.g., `"Brickell Avenue, Miami, Florida"`).
    pub query: String,
    /// Comma-separated ISO country codes to restrict results to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<String>,
    /// Category filter (e.g., `"city"`, `"address"`, `"country"`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Maximum number of hits to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits_per_page: Option<u32>,
    /// Restricts localized fields to a single language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Biases results around a `"lat,lng"` point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub around_lat_lng: Option<String>,
    /// Per-call credentials. Never serialized into the request body.
    #[serde(skip)]
    pub credentials: Option<Credentials>,
}

impl SearchParameters {
    /// Creates parameters for a free-text query with no filters.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Restricts results to the given comma-separated country codes.
    #[must_use]
    pub fn with_countries(mut self, countries: impl Into<String>) -> Self {
        self.countries = Some(countries.into());
        self
    }

    /// Restricts results to a single category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Overrides the client's default credentials for this call only.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

/// Application identifier and API key sent as authentication headers.
///
/// Each value is resolved on its own, so a per-call override may replace
/// just the key while keeping the configured application identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Value for the application identifier header.
    pub application_id: Option<String>,
    /// Value for the API key header.
    pub api_key: Option<String>,
}

impl Credentials {
    /// Creates credentials with both values set.
    #[must_use]
    pub fn new(application_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            application_id: Some(application_id.into()),
            api_key: Some(api_key.into()),
        }
    }

    /// Resolves each value with `self` taking precedence over `defaults`.
    ///
    /// Empty strings count as unset.
    #[must_use]
    pub fn merged_over(&self, defaults: &Self) -> Self {
        Self {
            application_id: first_non_empty(
                self.application_id.as_deref(),
                defaults.application_id.as_deref(),
            ),
            api_key: first_non_empty(self.api_key.as_deref(), defaults.api_key.as_deref()),
        }
    }
}

fn first_non_empty(preferred: Option<&str>, fallback: Option<&str>) -> Option<String> {
    preferred
        .filter(|s| !s.is_empty())
        .or_else(|| fallback.filter(|s| !s.is_empty()))
        .map(str::to_string)
}

/// Response body of a places query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Matching places in relevance order.
    pub hits: Vec<Hit>,
    /// Number of hits reported by the service.
    #[serde(rename = "nbHits")]
    pub nb_hits: u64,
    /// Server-side processing time in milliseconds.
    #[serde(rename = "processingTimeMS", default)]
    pub processing_time_ms: u64,
    /// Echo of the query string.
    #[serde(default)]
    pub query: String,
    /// URL-encoded echo of the parameters as received by the service.
    #[serde(default)]
    pub params: String,
}

/// A single candidate place returned by the service.
///
/// Every field is optional on the wire; missing and `null` fields decode
/// to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hit {
    /// Whether the hit is a country.
    #[serde(deserialize_with = "null_as_default")]
    pub is_country: bool,
    /// Whether the hit is a highway.
    #[serde(deserialize_with = "null_as_default")]
    pub is_highway: bool,
    /// Whether the hit is a city.
    #[serde(deserialize_with = "null_as_default")]
    pub is_city: bool,
    /// Whether the hit is a suburb.
    #[serde(deserialize_with = "null_as_default")]
    pub is_suburb: bool,
    /// Whether the hit is a popular place.
    #[serde(deserialize_with = "null_as_default")]
    pub is_popular: bool,
    /// Localized country name, keyed by locale.
    #[serde(deserialize_with = "null_as_default")]
    pub country: BTreeMap<String, String>,
    /// Localized city name variants, keyed by locale.
    #[serde(deserialize_with = "null_as_default")]
    pub city: BTreeMap<String, Vec<String>>,
    /// Localized county name, keyed by locale.
    #[serde(deserialize_with = "null_as_default")]
    pub county: BTreeMap<String, String>,
    /// Localized names of the place itself, keyed by locale.
    #[serde(deserialize_with = "null_as_default")]
    pub locale_names: BTreeMap<String, Vec<String>>,
    /// Administrative divisions, coarsest first.
    #[serde(deserialize_with = "null_as_default")]
    pub administrative: Vec<String>,
    /// Suburb name candidates.
    #[serde(deserialize_with = "null_as_default")]
    pub suburb: Vec<String>,
    /// Postcode candidates.
    #[serde(deserialize_with = "null_as_default")]
    pub postcode: Vec<String>,
    /// Free-form category tags.
    #[serde(rename = "_tags", alias = "tags", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Population count.
    pub population: Option<i64>,
    /// ISO 3166-1 alpha-2 country code (lowercase).
    pub country_code: Option<String>,
    /// Relevance importance score.
    pub importance: Option<i64>,
    /// OSM administrative level.
    pub admin_level: Option<i64>,
    /// Coordinates of the place.
    #[serde(rename = "_geoloc")]
    pub geolocation: Option<Geolocation>,
    /// Stable identifier assigned by the service.
    #[serde(rename = "objectID")]
    pub object_id: Option<String>,
}

impl Hit {
    /// Classifies the hit by its category flags.
    ///
    /// When several flags are set the first match wins, in the order
    /// city, suburb, country, highway, popular.
    #[must_use]
    pub const fn kind(&self) -> PlaceKind {
        if self.is_city {
            PlaceKind::City
        } else if self.is_suburb {
            PlaceKind::Suburb
        } else if self.is_country {
            PlaceKind::Country
        } else if self.is_highway {
            PlaceKind::Highway
        } else if self.is_popular {
            PlaceKind::Popular
        } else {
            PlaceKind::Generic
        }
    }

    /// First default-locale name of the place itself.
    #[must_use]
    pub fn default_locale_name(&self) -> Option<&str> {
        first_default(&self.locale_names)
    }

    /// First default-locale name of the containing city.
    #[must_use]
    pub fn default_city_name(&self) -> Option<&str> {
        first_default(&self.city)
    }
}

/// Decodes `null` as the type's default, so one null field does not fail
/// the whole response.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn first_default(names: &BTreeMap<String, Vec<String>>) -> Option<&str> {
    names
        .get(DEFAULT_LOCALE)
        .and_then(|variants| variants.first())
        .map(String::as_str)
}

/// Latitude/longitude pair (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// What a [`Hit`] describes, decoded from its raw category flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum PlaceKind {
    /// A city; its own name is the city name.
    City,
    /// A suburb or neighbourhood.
    Suburb,
    /// A whole country.
    Country,
    /// A highway or named street.
    Highway,
    /// A popular place (landmark, venue).
    Popular,
    /// Anything else, typically a street address.
    Generic,
}

/// A flat address resolved from a [`Hit`].
///
/// Every component is optional; an absent component is a valid result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Country name.
    pub country: Option<String>,
    /// Postal code.
    pub postcode: Option<String>,
    /// State, province or region.
    pub state: Option<String>,
    /// City (or suburb standing in for it).
    pub city: Option<String>,
    /// Street name.
    pub street: Option<String>,
}

impl Address {
    /// Returns `true` when no component is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.postcode.is_none()
            && self.state.is_none()
            && self.city.is_none()
            && self.street.is_none()
    }
}
