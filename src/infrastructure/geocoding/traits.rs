//! # Geocoder Trait
//!
//! Port for resolving a free-text address into a [`Coordinate`].

use crate::domain::value_objects::Coordinate;
use crate::infrastructure::geocoding::error::GeocodingResult;
use async_trait::async_trait;
use std::fmt;

/// Resolves addresses to coordinates.
///
/// Implementations may call a remote provider; callers should treat every
/// call as fallible and potentially slow.
#[async_trait]
pub trait Geocoder: Send + Sync + fmt::Debug {
    /// Resolves one address.
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::NoResults` if the address matches nothing,
    /// or a transport/provider error.
    async fn coordinates(&self, address: &str) -> GeocodingResult<Coordinate>;

    /// Returns the provider name, for logging.
    fn name(&self) -> &'static str;
}
