//! # Logistic Operator Entity
//!
//! A carrier's rate card: a cubic factor plus one rate tier per
//! [`DistanceBand`].
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipping_quote::domain::entities::{LogisticOperator, RateTier};
//! use shipping_quote::domain::value_objects::DistanceBand;
//!
//! let operator = LogisticOperator::new(
//!     "Fast Freight",
//!     Decimal::from(300),
//!     RateTier::new(2, Decimal::from(10)),
//!     RateTier::new(4, Decimal::from(12)),
//!     RateTier::new(7, Decimal::from(15)),
//! ).unwrap();
//!
//! assert_eq!(operator.tier(DistanceBand::Mid).delivery_time(), 4);
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{DistanceBand, OperatorId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a rate card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateTier {
    /// Delivery time in time units (days).
    delivery_time: u32,
    /// Price per billable unit.
    #[serde(with = "rust_decimal::serde::float")]
    distance_multiplier: Decimal,
}

impl RateTier {
    /// Creates a rate tier.
    #[must_use]
    pub fn new(delivery_time: u32, distance_multiplier: Decimal) -> Self {
        Self {
            delivery_time,
            distance_multiplier,
        }
    }

    /// Returns the delivery time.
    #[inline]
    #[must_use]
    pub fn delivery_time(&self) -> u32 {
        self.delivery_time
    }

    /// Returns the price multiplier.
    #[inline]
    #[must_use]
    pub fn distance_multiplier(&self) -> Decimal {
        self.distance_multiplier
    }
}

/// A logistic operator and its distance-tiered rate card.
///
/// # Invariants
///
/// - All three tiers are present (enforced by the type)
/// - Tiers need not be monotonic in time or price
/// - Operators built through [`LogisticOperator::new`] have a positive
///   cubic factor and non-negative multipliers. Records rebuilt with
///   [`LogisticOperator::from_parts`] are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticOperator {
    id: OperatorId,
    name: String,
    /// Divisor converting volume into billable units.
    #[serde(with = "rust_decimal::serde::float")]
    cubic_factor: Decimal,
    base: RateTier,
    mid: RateTier,
    far: RateTier,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl LogisticOperator {
    /// Creates a new operator with validation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` if the name is blank.
    /// Returns `DomainError::InvalidRateCard` if the cubic factor is not
    /// positive or a multiplier is negative.
    pub fn new(
        name: impl Into<String>,
        cubic_factor: Decimal,
        base: RateTier,
        mid: RateTier,
        far: RateTier,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::MissingField("name"));
        }
        if cubic_factor <= Decimal::ZERO {
            return Err(DomainError::invalid_rate_card(format!(
                "cubic factor must be positive, got {cubic_factor}"
            )));
        }
        for (band, tier) in [
            (DistanceBand::Base, &base),
            (DistanceBand::Mid, &mid),
            (DistanceBand::Far, &far),
        ] {
            if tier.distance_multiplier < Decimal::ZERO {
                return Err(DomainError::invalid_rate_card(format!(
                    "{band} multiplier must not be negative"
                )));
            }
        }

        let now = Timestamp::now();
        Ok(Self {
            id: OperatorId::new_v4(),
            name,
            cubic_factor,
            base,
            mid,
            far,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuilds an operator from stored parts without validation.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: OperatorId,
        name: String,
        cubic_factor: Decimal,
        base: RateTier,
        mid: RateTier,
        far: RateTier,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            cubic_factor,
            base,
            mid,
            far,
            created_at,
            updated_at,
        }
    }

    /// Returns the operator ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> OperatorId {
        self.id
    }

    /// Returns the operator name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cubic factor.
    #[inline]
    #[must_use]
    pub fn cubic_factor(&self) -> Decimal {
        self.cubic_factor
    }

    /// Returns the rate tier for a distance band.
    #[must_use]
    pub fn tier(&self, band: DistanceBand) -> &RateTier {
        match band {
            DistanceBand::Base => &self.base,
            DistanceBand::Mid => &self.mid,
            DistanceBand::Far => &self.far,
        }
    }

    /// Returns when the operator was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the operator was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

impl fmt::Display for LogisticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({} {})", self.name, self.id)
    }
}
