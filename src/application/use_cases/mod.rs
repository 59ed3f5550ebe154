//! # Use Cases
//!
//! Application use cases driven by the API layer.
//!
//! - [`SimulationService`]: Compute, store, and manage shipping quotes
//! - [`OperatorService`]: Manage the logistic operator catalog

pub mod operator_service;
pub mod simulation_service;

pub use operator_service::{NewOperator, OperatorService};
pub use simulation_service::SimulationService;
