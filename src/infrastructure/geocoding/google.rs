//! # Google Geocoder
//!
//! [`Geocoder`] backed by the Google Maps Geocoding API.
//!
//! Calls `GET {base_url}/maps/api/geocode/json?address=..&key=..` and reads
//! `results[0].geometry.location`. The provider reports most failures in a
//! `status` field on a 200 response, so that field is mapped to
//! [`GeocodingError`] variants as well.

use crate::domain::value_objects::Coordinate;
use crate::infrastructure::geocoding::error::{GeocodingError, GeocodingResult};
use crate::infrastructure::geocoding::http_client::HttpClient;
use crate::infrastructure::geocoding::traits::Geocoder;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Google Maps geocoding adapter.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: HttpClient,
    endpoint: String,
    api_key: String,
}

impl GoogleGeocoder {
    /// Creates a geocoder for the given API root and key.
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::InternalError` if the HTTP client cannot be
    /// built.
    pub fn new(
        base_url: impl AsRef<str>,
        api_key: impl Into<String>,
        timeout_ms: u64,
    ) -> GeocodingResult<Self> {
        Ok(Self {
            client: HttpClient::new(timeout_ms)?,
            endpoint: format!("{}{}", base_url.as_ref().trim_end_matches('/'), GEOCODE_PATH),
            api_key: api_key.into(),
        })
    }

    /// Returns the full geocode endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn interpret(address: &str, response: GeocodeResponse) -> GeocodingResult<Coordinate> {
        let detail = response.error_message.unwrap_or_default();
        match response.status.as_str() {
            "OK" => {
                let location = response
                    .results
                    .into_iter()
                    .next()
                    .map(|r| r.geometry.location)
                    .ok_or_else(|| GeocodingError::no_results(address))?;
                Coordinate::new(location.lat, location.lng).map_err(|e| {
                    GeocodingError::protocol_error(format!("provider returned {}", e))
                })
            }
            "ZERO_RESULTS" => Err(GeocodingError::no_results(address)),
            "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => Err(GeocodingError::rate_limited(detail)),
            "REQUEST_DENIED" => Err(GeocodingError::authentication(detail)),
            "INVALID_REQUEST" => Err(GeocodingError::invalid_request(detail)),
            "UNKNOWN_ERROR" => Err(GeocodingError::connection(detail)),
            other => Err(GeocodingError::protocol_error(format!(
                "unexpected status {}: {}",
                other, detail
            ))),
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn coordinates(&self, address: &str) -> GeocodingResult<Coordinate> {
        let params = [("address", address), ("key", self.api_key.as_str())];
        let response: GeocodeResponse = self.client.get_with_params(&self.endpoint, &params).await?;

        let result = Self::interpret(address, response);
        match &result {
            Ok(coordinate) => debug!(address, %coordinate, "Address geocoded"),
            Err(e) => warn!(address, error = %e, "Geocoding failed"),
        }
        result
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
