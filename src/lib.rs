//! Springfield application library.
//!
//! REST backend serving user accounts and their favorited characters and
//! locations from The Simpsons, persisted in a relational store and
//! supplemented by a read-only passthrough to the upstream show catalog.

pub mod model;
pub mod server;
