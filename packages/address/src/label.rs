//! One-line rendering of resolved addresses.

use places_search_places_models::Address;

/// Separator placed between address components.
pub const LABEL_SEPARATOR: &str = ", ";

/// Joins the present components of `address` in the order street, city,
/// state, postcode, country.
///
/// Absent and empty components are skipped, so there is never a leading,
/// trailing or doubled separator. An empty address renders as `""`.
#[must_use]
pub fn format_label(address: &Address) -> String {
    [
        &address.street,
        &address.city,
        &address.state,
        &address.postcode,
        &address.country,
    ]
    .into_iter()
    .filter_map(|component| component.as_deref().filter(|s| !s.is_empty()))
    .collect::<Vec<_>>()
    .join(LABEL_SEPARATOR)
}
