//! # Shipping Quote
//!
//! Shipping quote service: great-circle distance between two addresses and
//! selection of the fastest and the cheapest logistic operator for a
//! package.
//!
//! # Architecture
//!
//! - [`domain`]: Entities, value objects, distance and rate resolution
//! - [`application`]: Quote engine, ranking strategies, use cases
//! - [`infrastructure`]: Geocoding and persistence adapters
//! - [`api`]: REST API
//! - [`config`]: Layered configuration
//! - [`telemetry`]: Tracing setup
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use shipping_quote::application::services::QuoteEngine;
//! use shipping_quote::domain::entities::{LogisticOperator, RateTier};
//! use shipping_quote::domain::services::distance;
//! use shipping_quote::domain::value_objects::ProductDimensions;
//!
//! let tier = RateTier::new(3, Decimal::from(10));
//! let operator = LogisticOperator::new("Carrier", Decimal::from(300), tier, tier, tier).unwrap();
//! let dims = ProductDimensions::new(Decimal::from(10), Decimal::from(10), Decimal::from(10)).unwrap();
//!
//! let km = distance(0.0, 0.0, 0.0, 1.0);
//! let selection = QuoteEngine::default().select_operators(km, &dims, &[operator]).unwrap();
//! assert_eq!(selection.faster, selection.cheaper);
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
