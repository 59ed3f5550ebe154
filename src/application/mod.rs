//! # Application Layer
//!
//! Use cases and application services.
//!
//! - [`error`]: Application error types
//! - [`services`]: Quote engine, ranking strategies, result assembly
//! - [`use_cases`]: Simulation and operator use cases

pub mod error;
pub mod services;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
