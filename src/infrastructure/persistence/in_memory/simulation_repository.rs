//! # In-Memory Simulation Repository
//!
//! In-memory implementation of [`SimulationRepository`].

use crate::domain::entities::{NewSimulation, Simulation};
use crate::domain::value_objects::SimulationId;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, SimulationRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`SimulationRepository`].
///
/// Uses a thread-safe `HashMap` for storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySimulationRepository {
    storage: Arc<RwLock<HashMap<SimulationId, Simulation>>>,
}

impl InMemorySimulationRepository {
    /// Creates a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all simulations.
    pub async fn clear(&self) {
        self.storage.write().await.clear();
    }
}

#[async_trait]
impl SimulationRepository for InMemorySimulationRepository {
    async fn create(&self, input: NewSimulation) -> RepositoryResult<Simulation> {
        let simulation = Simulation::from_new(input);
        let mut storage = self.storage.write().await;
        if storage.contains_key(&simulation.id()) {
            return Err(RepositoryError::duplicate("Simulation", simulation.id()));
        }
        storage.insert(simulation.id(), simulation.clone());
        Ok(simulation)
    }

    async fn get(&self, id: &SimulationId) -> RepositoryResult<Option<Simulation>> {
        let storage = self.storage.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Simulation>> {
        let storage = self.storage.read().await;
        let mut all: Vec<Simulation> = storage.values().cloned().collect();
        all.sort_by_key(|s| (s.created_at(), s.id()));
        Ok(all)
    }

    async fn update(&self, simulation: &Simulation) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        match storage.get_mut(&simulation.id()) {
            Some(stored) => {
                *stored = simulation.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found("Simulation", simulation.id())),
        }
    }

    async fn delete(&self, id: &SimulationId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        Ok(storage.remove(id).is_some())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
