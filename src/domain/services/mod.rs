//! # Domain Services
//!
//! Pure functions that don't naturally belong to a single entity.
//!
//! ## Services
//!
//! - [`geo_distance`]: Haversine great-circle distance
//! - [`rate_resolver`]: Distance band resolution and rate card lookup

pub mod geo_distance;
pub mod rate_resolver;

pub use geo_distance::{EARTH_RADIUS_KM, distance, distance_between};
pub use rate_resolver::{rate_for, resolve_tier};
