//! # Ranking Strategy
//!
//! Strategies for ranking per-operator quotes.
//!
//! This module provides the [`RankingStrategy`] trait and the two criteria
//! the quote engine selects on: fastest delivery and lowest price. Both are
//! stable, so operators that tie keep their input order.

use crate::application::services::quote_engine::OperatorQuote;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An operator quote with its position in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedQuote {
    /// The quote being ranked.
    pub quote: OperatorQuote,
    /// The rank (1 = best).
    pub rank: usize,
}

impl RankedQuote {
    /// Creates a new ranked quote.
    #[must_use]
    pub fn new(quote: OperatorQuote, rank: usize) -> Self {
        Self { quote, rank }
    }

    /// Returns true if this quote is the best (rank 1).
    #[must_use]
    pub fn is_best(&self) -> bool {
        self.rank == 1
    }
}

impl fmt::Display for RankedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RankedQuote(#{} {})", self.rank, self.quote)
    }
}

/// Trait for ranking strategies.
///
/// Implementations must be stable: quotes that compare equal keep the
/// order in which they were given.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Ranks the given quotes, best first.
    fn rank(&self, quotes: &[OperatorQuote]) -> Vec<RankedQuote>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Ranks by delivery time, shortest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastestDeliveryStrategy;

impl FastestDeliveryStrategy {
    /// Creates a new fastest delivery strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for FastestDeliveryStrategy {
    fn rank(&self, quotes: &[OperatorQuote]) -> Vec<RankedQuote> {
        rank_by_key(quotes, |q| q.time)
    }

    fn name(&self) -> &'static str {
        "FastestDelivery"
    }
}

/// Ranks by price, cheapest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestPriceStrategy;

impl LowestPriceStrategy {
    /// Creates a new lowest price strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RankingStrategy for LowestPriceStrategy {
    fn rank(&self, quotes: &[OperatorQuote]) -> Vec<RankedQuote> {
        rank_by_key(quotes, |q| q.exact_price)
    }

    fn name(&self) -> &'static str {
        "LowestPrice"
    }
}

fn rank_by_key<K, F>(quotes: &[OperatorQuote], key: F) -> Vec<RankedQuote>
where
    K: Ord,
    F: Fn(&OperatorQuote) -> K,
{
    let mut ordered: Vec<&OperatorQuote> = quotes.iter().collect();
    // slice::sort_by_key is stable
    ordered.sort_by_key(|q| key(*q));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, q)| RankedQuote::new(q.clone(), i + 1))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::{LogisticOperator, RateTier};
    use crate::domain::value_objects::DistanceBand;
    use rust_decimal_macros::dec;

    fn quote(name: &str, time: u32, price: rust_decimal::Decimal) -> OperatorQuote {
        let tier = RateTier::new(time, dec!(1));
        let operator = LogisticOperator::new(name, dec!(300), tier, tier, tier).unwrap();
        OperatorQuote::new(operator, DistanceBand::Base, time, price)
    }

    #[test]
    fn fastest_orders_by_time() {
        let quotes = vec![
            quote("slow", 9, dec!(1)),
            quote("fast", 2, dec!(50)),
            quote("mid", 5, dec!(10)),
        ];

        let ranked = FastestDeliveryStrategy::new().rank(&quotes);

        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].is_best());
        assert_eq!(ranked[0].quote.operator.name(), "fast");
        assert_eq!(ranked[1].quote.operator.name(), "mid");
        assert_eq!(ranked[2].quote.operator.name(), "slow");
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn lowest_price_orders_by_price() {
        let quotes = vec![
            quote("a", 1, dec!(33.33)),
            quote("b", 2, dec!(10)),
            quote("c", 3, dec!(12.5)),
        ];

        let ranked = LowestPriceStrategy::new().rank(&quotes);

        assert_eq!(ranked[0].quote.operator.name(), "b");
        assert_eq!(ranked[1].quote.operator.name(), "c");
        assert_eq!(ranked[2].quote.operator.name(), "a");
    }

    #[test]
    fn lowest_price_compares_unrounded_amounts() {
        let quotes = vec![
            quote("rounds-same-but-dearer", 1, dec!(0.3333)),
            quote("rounds-same-but-cheaper", 2, dec!(0.3322)),
        ];

        let ranked = LowestPriceStrategy::new().rank(&quotes);

        assert_eq!(ranked[0].quote.operator.name(), "rounds-same-but-cheaper");
        assert_eq!(ranked[0].quote.price, ranked[1].quote.price);
    }

    #[test]
    fn ties_keep_input_order() {
        let quotes = vec![
            quote("first", 4, dec!(7)),
            quote("second", 4, dec!(7)),
            quote("third", 4, dec!(7)),
        ];

        let by_time = FastestDeliveryStrategy::new().rank(&quotes);
        let by_price = LowestPriceStrategy::new().rank(&quotes);

        for ranked in [by_time, by_price] {
            let names: Vec<&str> = ranked.iter().map(|r| r.quote.operator.name()).collect();
            assert_eq!(names, ["first", "second", "third"]);
        }
    }

    #[test]
    fn empty_input_ranks_nothing() {
        assert!(FastestDeliveryStrategy::new().rank(&[]).is_empty());
        assert!(LowestPriceStrategy::new().rank(&[]).is_empty());
    }

    #[test]
    fn strategy_names() {
        assert_eq!(FastestDeliveryStrategy::new().name(), "FastestDelivery");
        assert_eq!(LowestPriceStrategy::new().name(), "LowestPrice");
    }
}
