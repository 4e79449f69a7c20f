//! HTTP handlers, one module per route family.

pub mod catalog;
pub mod character;
pub mod favorite;
pub mod location;
pub mod user;
