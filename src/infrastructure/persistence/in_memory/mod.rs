//! # In-Memory Repositories
//!
//! In-memory implementations without database dependencies.
//!
//! ## Available Repositories
//!
//! - [`InMemorySimulationRepository`]: Simulation persistence
//! - [`InMemoryOperatorRepository`]: Operator catalog
//!
//! ## Thread Safety
//!
//! Both use `Arc<tokio::sync::RwLock<_>>`, so clones share storage.

pub mod operator_repository;
pub mod simulation_repository;

pub use operator_repository::InMemoryOperatorRepository;
pub use simulation_repository::InMemorySimulationRepository;
