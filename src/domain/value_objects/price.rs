//! # Price Value Object
//!
//! Shipping price in currency units, kept at cent precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places a price is rounded to.
pub const PRICE_SCALE: u32 = 2;

/// A shipping price rounded to cents. Serializes as a JSON number.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shipping_quote::domain::value_objects::Price;
///
/// let price = Price::from_decimal(Decimal::new(333333, 4));
/// assert_eq!(price.get(), Decimal::new(3333, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Creates a price, rounding half away from zero to cents.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Returns the decimal amount.
    #[inline]
    #[must_use]
    pub fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(Price::from_decimal(dec!(0.125)).get(), dec!(0.13));
        assert_eq!(Price::from_decimal(dec!(0.124)).get(), dec!(0.12));
    }

    #[test]
    fn orders_by_amount() {
        assert!(Price::from_decimal(dec!(10)) < Price::from_decimal(dec!(33.33)));
    }

    #[test]
    fn display_two_places() {
        assert_eq!(Price::from_decimal(dec!(10)).to_string(), "10.00");
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_value(Price::from_decimal(dec!(33.333))).unwrap();
        assert_eq!(json.as_f64(), Some(33.33));
    }
}
