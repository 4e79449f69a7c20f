//! Public API data transfer objects.
//!
//! These structs define the JSON shapes the HTTP surface emits. Conversions
//! from database models are pure and never trigger additional store access;
//! anything a DTO needs must already be resident on the model.

pub mod api;
pub mod favorite;
pub mod show;
pub mod user;
