//! # Application Errors
//!
//! Error types for the application layer.
//!
//! These errors represent failures that can occur during use case execution,
//! including validation failures, quote computation failures, and
//! collaborator errors.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)              - Invalid input or rate card
//! ├── Validation(String)               - Request validation failures
//! ├── Quote(QuoteError)                - No operators / misconfigured operator
//! ├── CoordinateResolutionFailed       - Geocoding failed for an address
//! ├── PersistenceFailed(RepositoryError) - Storage failure
//! └── NotFound                         - Resource not found
//! ```
//!
//! # Examples
//!
//! ```
//! use shipping_quote::application::error::ApplicationError;
//! use shipping_quote::infrastructure::persistence::RepositoryError;
//!
//! let err = ApplicationError::validation("client name is required");
//! assert!(err.is_validation());
//!
//! // Repository not-found errors surface as application not-found errors
//! let err: ApplicationError = RepositoryError::not_found("Simulation", "sim-1").into();
//! assert!(err.is_not_found());
//! ```

use crate::application::services::QuoteError;
use crate::domain::errors::DomainError;
use crate::infrastructure::geocoding::GeocodingError;
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain invariant violated by the input.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Quote computation failed.
    #[error("quote error: {0}")]
    Quote(#[from] QuoteError),

    /// An address could not be turned into coordinates.
    #[error("could not resolve coordinates for {address}: {source}")]
    CoordinateResolutionFailed {
        /// The address that failed.
        address: String,
        /// Underlying geocoding failure.
        #[source]
        source: GeocodingError,
    },

    /// Storing or loading a record failed.
    #[error("persistence failed: {0}")]
    PersistenceFailed(#[source] RepositoryError),

    /// Resource not found.
    #[error("not found: {resource_type} with id {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a coordinate resolution error.
    #[must_use]
    pub fn coordinate_resolution(address: impl Into<String>, source: GeocodingError) -> Self {
        Self::CoordinateResolutionFailed {
            address: address.into(),
            source,
        }
    }

    /// Returns a stable machine-readable kind for this error.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) | Self::Validation(_) => "validation_error",
            Self::Quote(QuoteError::NoOperatorsAvailable) => "no_operators_available",
            Self::Quote(QuoteError::Configuration { .. }) => "configuration_error",
            Self::CoordinateResolutionFailed { .. } => "coordinate_resolution_failed",
            Self::PersistenceFailed(_) => "persistence_failed",
            Self::NotFound { .. } => "not_found",
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::CoordinateResolutionFailed { source, .. } => source.is_retryable(),
            Self::PersistenceFailed(RepositoryError::Connection(_)) => true,
            _ => false,
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { entity_type, id } => Self::NotFound {
                resource_type: entity_type.to_string(),
                id,
            },
            other => Self::PersistenceFailed(other),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error() {
        let err = ApplicationError::validation("height must be positive");
        assert!(err.to_string().contains("height must be positive"));
        assert!(err.is_validation());
        assert_eq!(err.kind(), "validation_error");
    }

    #[test]
    fn domain_error_is_validation() {
        let err: ApplicationError = DomainError::MissingField("client_name").into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("client_name"));
    }

    #[test]
    fn not_found_error() {
        let err = ApplicationError::not_found("Simulation", "sim-123");
        assert!(err.to_string().contains("Simulation"));
        assert!(err.to_string().contains("sim-123"));
        assert!(err.is_not_found());
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn repository_not_found_maps_to_not_found() {
        let err: ApplicationError = RepositoryError::not_found("Simulation", "abc").into();
        assert!(matches!(
            err,
            ApplicationError::NotFound { ref resource_type, ref id }
                if resource_type == "Simulation" && id == "abc"
        ));
    }

    #[test]
    fn other_repository_errors_are_persistence_failures() {
        let err: ApplicationError = RepositoryError::connection("pool closed").into();
        assert_eq!(err.kind(), "persistence_failed");
        assert!(err.is_retryable());

        let err: ApplicationError = RepositoryError::internal("corrupt row").into();
        assert!(!err.is_retryable());
    }

    #[test]
    fn quote_error_kinds() {
        let err: ApplicationError = QuoteError::NoOperatorsAvailable.into();
        assert_eq!(err.kind(), "no_operators_available");
        assert!(!err.is_retryable());
    }

    #[test]
    fn coordinate_resolution_carries_source() {
        let err = ApplicationError::coordinate_resolution(
            "Rua A, 1",
            GeocodingError::timeout("after 5000ms"),
        );
        assert_eq!(err.kind(), "coordinate_resolution_failed");
        assert!(err.to_string().contains("Rua A, 1"));
        assert!(err.is_retryable());
        assert!(std::error::Error::source(&err).is_some());
    }
}
