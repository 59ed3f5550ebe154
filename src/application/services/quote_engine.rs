//! # Quote Engine
//!
//! Prices every candidate operator for a shipment and picks the fastest and
//! the cheapest.
//!
//! Each operator is quoted once; the two selections are independent ranking
//! passes over the same set of quotes, so neither depends on the other's
//! ordering. Ties go to the operator listed first.
//!
//! # Examples
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipping_quote::application::services::QuoteEngine;
//! use shipping_quote::domain::entities::{LogisticOperator, RateTier};
//! use shipping_quote::domain::value_objects::ProductDimensions;
//!
//! let tier = RateTier::new(3, Decimal::from(5));
//! let operator = LogisticOperator::new("Solo", Decimal::from(500), tier, tier, tier).unwrap();
//! let dims = ProductDimensions::new(Decimal::from(10), Decimal::from(10), Decimal::from(10)).unwrap();
//!
//! let selection = QuoteEngine::default()
//!     .select_operators(42.0, &dims, &[operator])
//!     .unwrap();
//! assert_eq!(selection.faster, selection.cheaper);
//! ```

use crate::application::services::ranking_strategy::{
    FastestDeliveryStrategy, LowestPriceStrategy, RankingStrategy,
};
use crate::domain::entities::LogisticOperator;
use crate::domain::services::rate_resolver::{rate_for, resolve_tier};
use crate::domain::value_objects::{DistanceBand, OperatorId, Price, ProductDimensions};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Error type for quote computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    /// The operator list was empty.
    #[error("no logistic operators available")]
    NoOperatorsAvailable,

    /// An operator's rate card cannot produce a price.
    #[error("configuration error for operator {operator_id}: {message}")]
    Configuration {
        /// The misconfigured operator.
        operator_id: OperatorId,
        /// What is wrong with it.
        message: String,
    },
}

impl QuoteError {
    /// Creates a configuration error for an operator.
    #[must_use]
    pub fn configuration(operator: &LogisticOperator, message: impl Into<String>) -> Self {
        Self::Configuration {
            operator_id: operator.id(),
            message: message.into(),
        }
    }
}

/// Result type for quote computation.
pub type EngineResult<T> = Result<T, QuoteError>;

/// One operator's offer for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorQuote {
    /// The quoted operator.
    pub operator: LogisticOperator,
    /// Band the distance fell into.
    pub band: DistanceBand,
    /// Delivery time of the band's tier.
    pub time: u32,
    /// `multiplier * volume / cubic_factor`, unrounded. Ranking uses this.
    pub exact_price: Decimal,
    /// `exact_price` rounded to cents, as reported.
    pub price: Price,
}

impl OperatorQuote {
    /// Creates a quote, deriving the reported price from the exact one.
    #[must_use]
    pub fn new(
        operator: LogisticOperator,
        band: DistanceBand,
        time: u32,
        exact_price: Decimal,
    ) -> Self {
        Self {
            operator,
            band,
            time,
            exact_price,
            price: Price::from_decimal(exact_price),
        }
    }
}

impl fmt::Display for OperatorQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} band={} time={} price={}",
            self.operator.name(),
            self.band,
            self.time,
            self.price
        )
    }
}

/// The fastest and the cheapest operator for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSelection {
    /// Shortest delivery time.
    pub faster: OperatorQuote,
    /// Lowest price.
    pub cheaper: OperatorQuote,
}

/// Stateless engine selecting operators by delivery time and by price.
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    fastest: Arc<dyn RankingStrategy>,
    cheapest: Arc<dyn RankingStrategy>,
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new(
            Arc::new(FastestDeliveryStrategy::new()),
            Arc::new(LowestPriceStrategy::new()),
        )
    }
}

impl QuoteEngine {
    /// Creates an engine with explicit ranking strategies.
    #[must_use]
    pub fn new(fastest: Arc<dyn RankingStrategy>, cheapest: Arc<dyn RankingStrategy>) -> Self {
        Self { fastest, cheapest }
    }

    /// Quotes one operator for a band and package volume.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::Configuration` if the cubic factor is not
    /// positive or the price overflows.
    pub fn quote_operator(
        operator: &LogisticOperator,
        band: DistanceBand,
        volume: Decimal,
    ) -> EngineResult<OperatorQuote> {
        let cubic_factor = operator.cubic_factor();
        if cubic_factor <= Decimal::ZERO {
            return Err(QuoteError::configuration(
                operator,
                format!("cubic factor must be positive, got {cubic_factor}"),
            ));
        }

        let tier = rate_for(operator, band);
        let price = volume
            .checked_div(cubic_factor)
            .and_then(|billable| tier.distance_multiplier().checked_mul(billable))
            .ok_or_else(|| QuoteError::configuration(operator, "price overflow"))?;

        Ok(OperatorQuote::new(
            operator.clone(),
            band,
            tier.delivery_time(),
            price,
        ))
    }

    /// Quotes every operator, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::NoOperatorsAvailable` for an empty list and
    /// `QuoteError::Configuration` for the first operator that cannot be
    /// priced.
    pub fn quote_operators(
        &self,
        distance_km: f64,
        dimensions: &ProductDimensions,
        operators: &[LogisticOperator],
    ) -> EngineResult<Vec<OperatorQuote>> {
        if operators.is_empty() {
            return Err(QuoteError::NoOperatorsAvailable);
        }

        let band = resolve_tier(distance_km);
        let volume = dimensions.volume();

        operators
            .iter()
            .map(|operator| {
                let quote = Self::quote_operator(operator, band, volume)?;
                debug!(
                    operator = %operator.id(),
                    band = %band,
                    time = quote.time,
                    price = %quote.price,
                    "quoted operator"
                );
                Ok(quote)
            })
            .collect()
    }

    /// Selects the fastest and the cheapest operator.
    ///
    /// Pure: identical inputs give identical selections.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::NoOperatorsAvailable` for an empty list and
    /// `QuoteError::Configuration` for an operator with an invalid cubic
    /// factor. No partial selection is returned.
    pub fn select_operators(
        &self,
        distance_km: f64,
        dimensions: &ProductDimensions,
        operators: &[LogisticOperator],
    ) -> EngineResult<OperatorSelection> {
        let quotes = self.quote_operators(distance_km, dimensions, operators)?;

        let faster = best_of(self.fastest.as_ref(), &quotes)?;
        let cheaper = best_of(self.cheapest.as_ref(), &quotes)?;

        Ok(OperatorSelection { faster, cheaper })
    }

    /// Returns the names of the two ranking strategies.
    #[must_use]
    pub fn strategy_names(&self) -> (&'static str, &'static str) {
        (self.fastest.name(), self.cheapest.name())
    }
}

fn best_of(strategy: &dyn RankingStrategy, quotes: &[OperatorQuote]) -> EngineResult<OperatorQuote> {
    strategy
        .rank(quotes)
        .into_iter()
        .next()
        .map(|ranked| ranked.quote)
        .ok_or(QuoteError::NoOperatorsAvailable)
}
