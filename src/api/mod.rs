//! # API Layer
//!
//! External interfaces of the service.
//!
//! - [`rest`]: REST API using axum

pub mod rest;
