//! # Geocoding
//!
//! Address resolution adapters.
//!
//! - [`GoogleGeocoder`]: Google Maps Geocoding API over HTTP
//! - [`StaticGeocoder`]: fixed address table

pub mod error;
pub mod google;
pub mod http_client;
pub mod static_geocoder;
pub mod traits;

pub use error::{GeocodingError, GeocodingResult};
pub use google::GoogleGeocoder;
pub use http_client::HttpClient;
pub use static_geocoder::StaticGeocoder;
pub use traits::Geocoder;
