//! # Persistence Layer
//!
//! Repository ports and their implementations.
//!
//! ## Repository Traits (Ports)
//!
//! - [`SimulationRepository`]: Persistence for simulation records
//! - [`OperatorRepository`]: The logistic operator catalog
//!
//! ## Implementations
//!
//! - `in_memory`: In-memory implementations for tests and single-node runs

pub mod in_memory;
pub mod traits;

pub use traits::{OperatorRepository, RepositoryError, RepositoryResult, SimulationRepository};
