#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Address resolution for places search hits.
//!
//! Hits returned by the places service do not share a schema: a city hit
//! carries its name in `locale_names`, a street hit carries the street
//! name in the same field, and a suburb hit keeps its own label in
//! `suburb`. This crate reconciles those conventions into a flat
//! [`Address`]:
//!
//! - [`resolve::resolve_address`] maps one hit to an address.
//! - [`resolve::resolve_addresses`] maps a slice of hits, keeping order.
//! - [`label::format_label`] renders an address as a one-line label.
//!
//! Every function here is pure and total. Missing data yields absent
//! address components, never an error.

pub mod label;
pub mod resolve;

pub use label::format_label;
pub use places_search_places_models::Address;
pub use resolve::{resolve_address, resolve_addresses};
