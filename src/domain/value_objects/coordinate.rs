//! # Coordinate Value Object
//!
//! A latitude/longitude pair in decimal degrees.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the Earth's surface in decimal degrees.
///
/// # Invariants
///
/// - `latitude` in `[-90, 90]`
/// - `longitude` in `[-180, 180]`
///
/// # Examples
///
/// ```
/// use shipping_quote::domain::value_objects::Coordinate;
///
/// let sao_paulo = Coordinate::new(-23.55052, -46.6333).unwrap();
/// assert!((sao_paulo.latitude() + 23.55052).abs() < f64::EPSILON);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating both ranges.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinate` if either component is out of
    /// range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::invalid_coordinate(format!(
                "latitude {latitude} outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::invalid_coordinate(format!(
                "longitude {longitude} outside [-180, 180]"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[inline]
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}
