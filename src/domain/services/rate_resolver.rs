//! # Operator Rate Resolution
//!
//! Maps a distance onto a [`DistanceBand`] and looks up the matching row of
//! an operator's rate card.

use crate::domain::entities::{LogisticOperator, RateTier};
use crate::domain::value_objects::{BASE_BAND_MAX_KM, DistanceBand, MID_BAND_MAX_KM};

/// Returns the distance band for a distance in kilometers.
///
/// Bounds are inclusive on the lower band: exactly 100 km is `Base`,
/// exactly 500 km is `Mid`.
///
/// # Examples
///
/// ```
/// use shipping_quote::domain::services::rate_resolver::resolve_tier;
/// use shipping_quote::domain::value_objects::DistanceBand;
///
/// assert_eq!(resolve_tier(100.0), DistanceBand::Base);
/// assert_eq!(resolve_tier(100.001), DistanceBand::Mid);
/// ```
#[must_use]
pub fn resolve_tier(distance_km: f64) -> DistanceBand {
    if distance_km <= BASE_BAND_MAX_KM {
        DistanceBand::Base
    } else if distance_km <= MID_BAND_MAX_KM {
        DistanceBand::Mid
    } else {
        DistanceBand::Far
    }
}

/// Returns the operator's rate tier for a band.
#[inline]
#[must_use]
pub fn rate_for(operator: &LogisticOperator, band: DistanceBand) -> &RateTier {
    operator.tier(band)
}
