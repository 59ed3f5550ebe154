//! # Domain Errors
//!
//! Error types raised when a domain invariant is violated.

use thiserror::Error;

/// Error type for domain validation failures.
///
/// # Examples
///
/// ```
/// use shipping_quote::domain::errors::DomainError;
///
/// let err = DomainError::invalid_dimensions("height must be positive");
/// assert!(err.to_string().contains("height"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Non-positive package dimension.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Rate card with a non-positive cubic factor or multiplier.
    #[error("invalid rate card: {0}")]
    InvalidRateCard(String),

    /// Required text field left blank.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

impl DomainError {
    /// Creates an invalid coordinate error.
    #[must_use]
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate(message.into())
    }

    /// Creates an invalid dimensions error.
    #[must_use]
    pub fn invalid_dimensions(message: impl Into<String>) -> Self {
        Self::InvalidDimensions(message.into())
    }

    /// Creates an invalid rate card error.
    #[must_use]
    pub fn invalid_rate_card(message: impl Into<String>) -> Self {
        Self::InvalidRateCard(message.into())
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
