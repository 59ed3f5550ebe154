//! # Distance Band
//!
//! The three distance ranges an operator's rate card is keyed by.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (inclusive) of the [`DistanceBand::Base`] band, in kilometers.
pub const BASE_BAND_MAX_KM: f64 = 100.0;

/// Upper bound (inclusive) of the [`DistanceBand::Mid`] band, in kilometers.
pub const MID_BAND_MAX_KM: f64 = 500.0;

/// Distance band selecting a row of an operator's rate card.
///
/// Derived from a computed distance, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceBand {
    /// Up to and including 100 km.
    Base,
    /// Above 100 km, up to and including 500 km.
    Mid,
    /// Above 500 km.
    Far,
}

impl DistanceBand {
    /// Returns the band name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Mid => "mid",
            Self::Far => "far",
        }
    }
}

impl fmt::Display for DistanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
