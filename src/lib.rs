//! Administrative client for a vehicle catalog (brands, models, car listings).
//!
//! The library keeps a local mirror of the admin API collections, tracks the
//! operator's selections against that mirror and sequences every mutation as
//! call -> refresh -> reconcile so the client is never more than one round-trip
//! away from server state.

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod model;
pub mod remote;

#[cfg(test)]
#[path = "tests/support/fake_api.rs"]
pub(crate) mod fake_api;
