//! Server application core modules.
//!
//! This module contains all server-side functionality for the Springfield
//! application: HTTP routing, request controllers, the favorites and user
//! services, database repositories, and the upstream show catalog
//! passthrough client.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
