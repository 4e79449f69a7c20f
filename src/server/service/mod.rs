//! Business logic between HTTP handlers and the data layer.

pub mod favorite;
pub mod user;
