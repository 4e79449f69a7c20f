//! Fixture helpers shared across unit and controller tests.
//!
//! `store` inserts rows directly through entity ActiveModels, bypassing the
//! application's repositories so tests of those repositories stay honest.
//! `catalog` builds mockito endpoints and payloads for the upstream catalog.

pub mod catalog;
pub mod store;
