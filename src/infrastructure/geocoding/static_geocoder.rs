//! # Static Geocoder
//!
//! [`Geocoder`] answering from a fixed address table. Used in tests and for
//! running the service without provider credentials.

use crate::domain::value_objects::Coordinate;
use crate::infrastructure::geocoding::error::{GeocodingError, GeocodingResult};
use crate::infrastructure::geocoding::traits::Geocoder;
use async_trait::async_trait;
use std::collections::HashMap;

/// Address table geocoder. Lookups are exact-match on the address string.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    table: HashMap<String, Coordinate>,
}

impl StaticGeocoder {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use]
    pub fn with(mut self, address: impl Into<String>, coordinate: Coordinate) -> Self {
        self.table.insert(address.into(), coordinate);
        self
    }

    /// Number of known addresses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if no addresses are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn coordinates(&self, address: &str) -> GeocodingResult<Coordinate> {
        self.table
            .get(address)
            .copied()
            .ok_or_else(|| GeocodingError::no_results(address))
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_address_resolves() {
        let here = Coordinate::new(-23.5, -46.6).unwrap();
        let geocoder = StaticGeocoder::new().with("here", here);

        assert_eq!(geocoder.coordinates("here").await.unwrap(), here);
        assert_eq!(geocoder.len(), 1);
    }

    #[tokio::test]
    async fn unknown_address_is_no_results() {
        let geocoder = StaticGeocoder::new();
        let err = geocoder.coordinates("nowhere").await.unwrap_err();
        assert!(matches!(err, GeocodingError::NoResults { address } if address == "nowhere"));
    }
}
