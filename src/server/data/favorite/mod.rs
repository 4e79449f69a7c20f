//! Repositories for the two favorite junction tables.

pub mod character;
pub mod location;
