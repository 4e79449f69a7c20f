//! Server-side model types.

pub mod app;
