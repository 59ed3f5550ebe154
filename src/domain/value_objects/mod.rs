//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`OperatorId`], [`SimulationId`]: UUID-based identifiers
//!
//! ## Geometry
//!
//! - [`Coordinate`]: Latitude/longitude pair
//! - [`ProductDimensions`]: Package measurements and volume
//! - [`DistanceBand`]: Rate card row selected by distance
//!
//! ## Money and Time
//!
//! - [`Price`]: Cent-precision decimal price
//! - [`Timestamp`]: UTC instant

pub mod coordinate;
pub mod dimensions;
pub mod distance_band;
pub mod ids;
pub mod price;
pub mod timestamp;

pub use coordinate::Coordinate;
pub use dimensions::ProductDimensions;
pub use distance_band::{BASE_BAND_MAX_KM, DistanceBand, MID_BAND_MAX_KM};
pub use ids::{OperatorId, SimulationId};
pub use price::Price;
pub use timestamp::Timestamp;
