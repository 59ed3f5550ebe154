//! # Domain Entities
//!
//! ## Entities
//!
//! - [`LogisticOperator`]: Carrier rate card with three distance tiers
//! - [`Simulation`]: Persisted shipping quote request

pub mod logistic_operator;
pub mod simulation;

pub use logistic_operator::{LogisticOperator, RateTier};
pub use simulation::{NewSimulation, Simulation, SimulationPatch};
