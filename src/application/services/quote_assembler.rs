//! # Quote Record Assembly
//!
//! Merges a stored [`Simulation`] with the computed distance and operator
//! selection into the [`QuoteResult`] returned to callers.

use crate::application::services::quote_engine::OperatorSelection;
use crate::domain::entities::{LogisticOperator, Simulation};
use crate::domain::value_objects::{Price, SimulationId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A computed shipping quote together with its stored request record.
///
/// Built once per request and never mutated afterwards. Decimal amounts
/// serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    /// Stored record ID.
    pub id: SimulationId,
    /// Requesting client.
    pub client_name: String,
    /// Origin address.
    pub from_address: String,
    /// Destination address.
    pub to_address: String,
    /// Package height in centimeters.
    #[serde(with = "rust_decimal::serde::float")]
    pub product_height: Decimal,
    /// Package width in centimeters.
    #[serde(with = "rust_decimal::serde::float")]
    pub product_width: Decimal,
    /// Package length in centimeters.
    #[serde(with = "rust_decimal::serde::float")]
    pub product_length: Decimal,
    /// Record creation time.
    pub created_at: Timestamp,
    /// Record update time.
    pub updated_at: Timestamp,
    /// Great-circle distance in kilometers.
    pub distance: f64,
    /// Operator with the shortest delivery time.
    pub faster_operator: LogisticOperator,
    /// Its delivery time.
    pub faster_operator_time: u32,
    /// Its price.
    pub faster_operator_price: Price,
    /// Operator with the lowest price.
    pub cheaper_operator: LogisticOperator,
    /// Its price.
    pub cheaper_operator_price: Price,
    /// Its delivery time.
    pub cheaper_operator_time: u32,
}

/// Builds the result from its three sources.
#[must_use]
pub fn assemble(record: Simulation, distance: f64, selection: OperatorSelection) -> QuoteResult {
    let OperatorSelection { faster, cheaper } = selection;
    QuoteResult {
        id: record.id(),
        client_name: record.client_name().to_string(),
        from_address: record.from_address().to_string(),
        to_address: record.to_address().to_string(),
        product_height: record.product_height(),
        product_width: record.product_width(),
        product_length: record.product_length(),
        created_at: record.created_at(),
        updated_at: record.updated_at(),
        distance,
        faster_operator: faster.operator,
        faster_operator_time: faster.time,
        faster_operator_price: faster.price,
        cheaper_operator: cheaper.operator,
        cheaper_operator_price: cheaper.price,
        cheaper_operator_time: cheaper.time,
    }
}
