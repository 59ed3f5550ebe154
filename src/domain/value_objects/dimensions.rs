//! # Product Dimensions
//!
//! Package measurements in centimeters.

use crate::domain::errors::{DomainError, DomainResult};
use rust_decimal::Decimal;
use std::fmt;

/// Height, width and length of a package, in centimeters.
///
/// # Invariants
///
/// - All three measurements are strictly positive
/// - Their product fits in a `Decimal`
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shipping_quote::domain::value_objects::ProductDimensions;
///
/// let dims = ProductDimensions::new(
///     Decimal::from(10),
///     Decimal::from(10),
///     Decimal::from(10),
/// ).unwrap();
/// assert_eq!(dims.volume(), Decimal::from(1000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductDimensions {
    height: Decimal,
    width: Decimal,
    length: Decimal,
    volume: Decimal,
}

impl ProductDimensions {
    /// Creates dimensions, rejecting zero or negative measurements and
    /// packages whose volume is not representable.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimensions` naming the first offending
    /// measurement, or the volume when it overflows.
    pub fn new(height: Decimal, width: Decimal, length: Decimal) -> DomainResult<Self> {
        for (name, value) in [("height", height), ("width", width), ("length", length)] {
            if value <= Decimal::ZERO {
                return Err(DomainError::invalid_dimensions(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let volume = height
            .checked_mul(width)
            .and_then(|area| area.checked_mul(length))
            .ok_or_else(|| {
                DomainError::invalid_dimensions(format!(
                    "volume of {height}x{width}x{length} cm is too large"
                ))
            })?;
        Ok(Self {
            height,
            width,
            length,
            volume,
        })
    }

    /// Returns the height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> Decimal {
        self.height
    }

    /// Returns the width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> Decimal {
        self.width
    }

    /// Returns the length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> Decimal {
        self.length
    }

    /// Returns `height * width * length` in cubic centimeters.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> Decimal {
        self.volume
    }
}

impl fmt::Display for ProductDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{} cm", self.height, self.width, self.length)
    }
}
