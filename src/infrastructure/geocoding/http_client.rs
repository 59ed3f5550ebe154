//! # HTTP Client
//!
//! Thin reqwest wrapper shared by geocoding adapters: request timeout,
//! JSON decoding, and HTTP status to [`GeocodingError`] mapping.

use crate::infrastructure::geocoding::error::{GeocodingError, GeocodingResult};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client wrapper for geocoding providers.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::InternalError` if the client cannot be created.
    pub fn new(timeout_ms: u64) -> GeocodingResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| {
                GeocodingError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Makes a GET request with query parameters and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns `GeocodingError::Timeout` or `GeocodingError::Connection` if the
    /// request fails, a status-specific error for non-2xx responses, and
    /// `GeocodingError::ProtocolError` if the body cannot be parsed.
    pub async fn get_with_params<T: DeserializeOwned, P: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> GeocodingResult<T> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> GeocodingResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                GeocodingError::protocol_error(format!("Failed to parse response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> GeocodingError {
        if error.is_timeout() {
            GeocodingError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            GeocodingError::connection(format!("Connection failed: {}", error))
        } else {
            GeocodingError::connection(format!("HTTP request failed: {}", error))
        }
    }

    fn map_status_error(&self, status: StatusCode, body: &str) -> GeocodingError {
        match status {
            StatusCode::BAD_REQUEST => {
                GeocodingError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GeocodingError::authentication(format!("Authentication failed: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => GeocodingError::rate_limited("Rate limit exceeded"),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                GeocodingError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => GeocodingError::protocol_error(format!("HTTP error ({}): {}", status, body)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_client() {
        let client = HttpClient::new(5000);
        assert!(client.is_ok());
        assert_eq!(client.unwrap().timeout_ms(), 5000);
    }

    #[test]
    fn status_mapping() {
        let client = HttpClient::new(1000).unwrap();
        assert!(matches!(
            client.map_status_error(StatusCode::FORBIDDEN, ""),
            GeocodingError::Authentication { .. }
        ));
        assert!(matches!(
            client.map_status_error(StatusCode::TOO_MANY_REQUESTS, ""),
            GeocodingError::RateLimited { .. }
        ));
        assert!(
            client
                .map_status_error(StatusCode::BAD_GATEWAY, "upstream")
                .is_retryable()
        );
        assert!(matches!(
            client.map_status_error(StatusCode::IM_A_TEAPOT, ""),
            GeocodingError::ProtocolError { .. }
        ));
    }
}
