//! # Great-Circle Distance
//!
//! Haversine distance between two points on a spherical Earth.
//!
//! # Examples
//!
//! ```
//! use shipping_quote::domain::services::geo_distance::distance;
//!
//! assert_eq!(distance(0.0, 0.0, 0.0, 1.0), 111.195);
//! ```

use crate::domain::value_objects::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Number of decimal places distances are rounded to.
const DISTANCE_DECIMALS: i32 = 3;

/// Returns the great-circle distance in kilometers, rounded to meters.
///
/// Inputs are decimal degrees and are not range-checked. The result is
/// non-negative, symmetric in its two points, and zero for identical points.
#[must_use]
pub fn distance(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lng = (lng_b - lng_a).to_radians();

    // Clamped: rounding can push the sum a hair past 1 near antipodes.
    let half_chord = ((d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    round_to(EARTH_RADIUS_KM * angle, DISTANCE_DECIMALS)
}

/// Returns the great-circle distance between two coordinates.
#[must_use]
pub fn distance_between(a: &Coordinate, b: &Coordinate) -> f64 {
    distance(a.latitude(), a.longitude(), b.latitude(), b.longitude())
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_origin_is_zero() {
        assert_eq!(distance(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        assert_eq!(distance(0.0, 0.0, 0.0, 1.0), 111.195);
    }

    #[test]
    fn sao_paulo_to_new_york() {
        assert_eq!(distance(-23.55052, -46.6333, 40.7128, -74.006), 7685.628);
    }

    #[test]
    fn coordinate_wrapper_matches_raw() {
        let sp = Coordinate::new(-23.55052, -46.6333).unwrap();
        let ny = Coordinate::new(40.7128, -74.006).unwrap();
        assert_eq!(distance_between(&sp, &ny), 7685.628);
        assert_eq!(distance_between(&ny, &sp), 7685.628);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = distance(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.001);
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            prop_assert_eq!(distance(lat, lng, lat, lng), 0.0);
        }

        #[test]
        fn distance_is_symmetric(
            lat_a in -90.0f64..=90.0,
            lng_a in -180.0f64..=180.0,
            lat_b in -90.0f64..=90.0,
            lng_b in -180.0f64..=180.0,
        ) {
            prop_assert_eq!(
                distance(lat_a, lng_a, lat_b, lng_b),
                distance(lat_b, lng_b, lat_a, lng_a)
            );
        }

        #[test]
        fn distance_is_bounded(
            lat_a in -90.0f64..=90.0,
            lng_a in -180.0f64..=180.0,
            lat_b in -90.0f64..=90.0,
            lng_b in -180.0f64..=180.0,
        ) {
            let d = distance(lat_a, lng_a, lat_b, lng_b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 0.001);
        }
    }
}
