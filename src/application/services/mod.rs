//! # Application Services
//!
//! Services that orchestrate domain logic.
//!
//! This module provides application-level services including:
//! - [`QuoteEngine`]: Per-operator quoting and fastest/cheapest selection
//! - [`RankingStrategy`]: Strategies for ranking operator quotes
//! - [`assemble`]: Typed merge of a stored record with computed results

pub mod quote_assembler;
pub mod quote_engine;
pub mod ranking_strategy;

pub use quote_assembler::{QuoteResult, assemble};
pub use quote_engine::{EngineResult, OperatorQuote, OperatorSelection, QuoteEngine, QuoteError};
pub use ranking_strategy::{
    FastestDeliveryStrategy, LowestPriceStrategy, RankedQuote, RankingStrategy,
};
