//! # Geocoding Errors
//!
//! Error types for address-to-coordinate resolution.
//!
//! # Examples
//!
//! ```
//! use shipping_quote::infrastructure::geocoding::error::GeocodingError;
//!
//! let error = GeocodingError::timeout("Request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = GeocodingError::no_results("nowhere street");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for geocoding operations.
#[derive(Debug, Clone, Error)]
pub enum GeocodingError {
    /// Request timed out.
    #[error("geocoding timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error, including provider 5xx responses.
    #[error("geocoding connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The provider rejected the API key.
    #[error("geocoding authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Quota exceeded.
    #[error("geocoding rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// The provider considered the request malformed.
    #[error("geocoding invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The address matched nothing.
    #[error("no geocoding results for address: {address}")]
    NoResults {
        /// The address that failed to resolve.
        address: String,
    },

    /// Unexpected response shape or status.
    #[error("geocoding protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// Client-side failure.
    #[error("geocoding internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl GeocodingError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a no results error.
    #[must_use]
    pub fn no_results(address: impl Into<String>) -> Self {
        Self::NoResults {
            address: address.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Returns true if the failure is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }
}

/// Result type for geocoding operations.
pub type GeocodingResult<T> = Result<T, GeocodingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(GeocodingError::timeout("t").is_retryable());
        assert!(GeocodingError::connection("c").is_retryable());
        assert!(GeocodingError::rate_limited("r").is_retryable());
    }

    #[test]
    fn permanent_errors_are_not_retryable() {
        assert!(!GeocodingError::authentication("a").is_retryable());
        assert!(!GeocodingError::invalid_request("i").is_retryable());
        assert!(!GeocodingError::no_results("x").is_retryable());
        assert!(!GeocodingError::protocol_error("p").is_retryable());
    }

    #[test]
    fn no_results_names_address() {
        let error = GeocodingError::no_results("Rua 1, 123");
        assert_eq!(
            error.to_string(),
            "no geocoding results for address: Rua 1, 123"
        );
    }
}
