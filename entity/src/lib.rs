//! Database entity definitions for the Springfield application.

pub mod prelude;

pub mod character;
pub mod location;
pub mod user;
pub mod user_favorite_character;
pub mod user_favorite_location;
