//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations, one
//! per table. They are generic over [`sea_orm::ConnectionTrait`] so the
//! same code runs against the live connection or inside a transaction.
//! An absent row is a valid `None` outcome, never an error.

pub mod character;
pub mod favorite;
pub mod location;
pub mod user;
