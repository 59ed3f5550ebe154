//! # Infrastructure Layer
//!
//! Adapters for external systems.
//!
//! - [`geocoding`]: Address to coordinate resolution
//! - [`persistence`]: Repository ports and in-memory adapters

pub mod geocoding;
pub mod persistence;
