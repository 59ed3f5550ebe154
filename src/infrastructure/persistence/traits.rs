//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! # Available Repositories
//!
//! - [`SimulationRepository`]: Stored simulation records
//! - [`OperatorRepository`]: The logistic operator catalog
//!
//! # Examples
//!
//! ```ignore
//! use shipping_quote::infrastructure::persistence::traits::OperatorRepository;
//!
//! async fn catalog_size(repo: &impl OperatorRepository) -> u64 {
//!     repo.count().await.unwrap_or(0)
//! }
//! ```

use crate::domain::entities::{LogisticOperator, NewSimulation, Simulation};
use crate::domain::value_objects::{OperatorId, SimulationId};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Storage backend unreachable.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl fmt::Display) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl fmt::Display) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for simulation records.
#[async_trait]
pub trait SimulationRepository: Send + Sync + fmt::Debug {
    /// Stores a new simulation and returns the persisted record.
    async fn create(&self, input: NewSimulation) -> RepositoryResult<Simulation>;

    /// Gets a simulation by ID.
    ///
    /// Returns `None` if the simulation does not exist.
    async fn get(&self, id: &SimulationId) -> RepositoryResult<Option<Simulation>>;

    /// Returns all simulations, oldest first.
    async fn find_all(&self) -> RepositoryResult<Vec<Simulation>>;

    /// Replaces a stored simulation.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no simulation has this ID.
    async fn update(&self, simulation: &Simulation) -> RepositoryResult<()>;

    /// Deletes a simulation. Returns true if it existed.
    async fn delete(&self, id: &SimulationId) -> RepositoryResult<bool>;

    /// Counts stored simulations.
    async fn count(&self) -> RepositoryResult<u64>;
}

/// Repository for the logistic operator catalog.
///
/// Implementations must enumerate operators in a stable order, since the
/// quote engine breaks ties by list position.
#[async_trait]
pub trait OperatorRepository: Send + Sync + fmt::Debug {
    /// Saves an operator.
    ///
    /// An existing operator with the same ID is replaced in place.
    async fn save(&self, operator: &LogisticOperator) -> RepositoryResult<()>;

    /// Gets an operator by ID.
    async fn get(&self, id: &OperatorId) -> RepositoryResult<Option<LogisticOperator>>;

    /// Returns every operator in catalog order.
    async fn find_all(&self) -> RepositoryResult<Vec<LogisticOperator>>;

    /// Deletes an operator. Returns true if it existed.
    async fn delete(&self, id: &OperatorId) -> RepositoryResult<bool>;

    /// Counts catalog entries.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = RepositoryError::not_found("Simulation", "abc");
        assert_eq!(err.to_string(), "Entity not found: Simulation with id abc");
        assert!(err.is_not_found());
        assert!(!err.is_duplicate());
    }

    #[test]
    fn duplicate_predicate() {
        let err = RepositoryError::duplicate("LogisticOperator", "op-1");
        assert!(err.is_duplicate());
        assert!(err.to_string().contains("op-1"));
    }

    #[test]
    fn connection_display() {
        let err = RepositoryError::connection("refused");
        assert_eq!(err.to_string(), "Connection error: refused");
    }
}
