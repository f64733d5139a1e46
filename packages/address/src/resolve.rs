//! Hit-to-address reconciliation.
//!
//! Each address component is resolved by its own rule:
//!
//! | Component | Source |
//! |-----------|--------|
//! | postcode  | `postcode`, only when it holds exactly one candidate |
//! | state     | first `administrative` entry |
//! | city      | own name for cities, else first suburb, else default city name |
//! | street    | own name, unless the hit is a country, suburb or city |
//!
//! Country is left for the caller to fill in.

use places_search_places_models::{Address, Hit, PlaceKind};

/// Resolves a single hit into a flat [`Address`].
///
/// Never fails: a hit with no usable fields resolves to an empty address.
#[must_use]
pub fn resolve_address(hit: &Hit) -> Address {
    let kind = hit.kind();

    Address {
        country: None,
        postcode: sole_postcode(hit),
        state: hit.administrative.first().cloned(),
        city: resolve_city(hit, kind),
        street: resolve_street(hit, kind),
    }
}

/// Resolves every hit in order. The output has one address per hit.
#[must_use]
pub fn resolve_addresses(hits: &[Hit]) -> Vec<Address> {
    hits.iter().map(resolve_address).collect()
}

/// Zero or several candidates are ambiguous and yield no postcode.
fn sole_postcode(hit: &Hit) -> Option<String> {
    match hit.postcode.as_slice() {
        [postcode] => Some(postcode.clone()),
        _ => None,
    }
}

fn resolve_city(hit: &Hit, kind: PlaceKind) -> Option<String> {
    match kind {
        PlaceKind::City => hit.default_locale_name().map(str::to_string),
        // A suburb label stands in for its containing city.
        PlaceKind::Suburb
        | PlaceKind::Country
        | PlaceKind::Highway
        | PlaceKind::Popular
        | PlaceKind::Generic => hit
            .suburb
            .first()
            .cloned()
            .or_else(|| hit.default_city_name().map(str::to_string)),
    }
}

/// `locale_names` holds the hit's own name, which is a street name for
/// anything that is not an area.
fn resolve_street(hit: &Hit, kind: PlaceKind) -> Option<String> {
    match kind {
        PlaceKind::Highway | PlaceKind::Popular | PlaceKind::Generic => {
            hit.default_locale_name().map(str::to_string)
        }
        PlaceKind::City | PlaceKind::Suburb | PlaceKind::Country => None,
    }
}
