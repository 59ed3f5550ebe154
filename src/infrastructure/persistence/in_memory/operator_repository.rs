//! # In-Memory Operator Repository
//!
//! In-memory implementation of [`OperatorRepository`].
//!
//! Operators are kept in a `Vec` so the catalog enumerates in insertion
//! order and tie-breaks between equally fast or cheap operators stay
//! deterministic across requests.

use crate::domain::entities::LogisticOperator;
use crate::domain::value_objects::OperatorId;
use crate::infrastructure::persistence::traits::{OperatorRepository, RepositoryResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`OperatorRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryOperatorRepository {
    storage: Arc<RwLock<Vec<LogisticOperator>>>,
}

impl InMemoryOperatorRepository {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-loaded with operators, in the given order.
    #[must_use]
    pub fn with_operators(operators: Vec<LogisticOperator>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(operators)),
        }
    }
}

#[async_trait]
impl OperatorRepository for InMemoryOperatorRepository {
    async fn save(&self, operator: &LogisticOperator) -> RepositoryResult<()> {
        let mut storage = self.storage.write().await;
        match storage.iter_mut().find(|o| o.id() == operator.id()) {
            Some(existing) => *existing = operator.clone(),
            None => storage.push(operator.clone()),
        }
        Ok(())
    }

    async fn get(&self, id: &OperatorId) -> RepositoryResult<Option<LogisticOperator>> {
        let storage = self.storage.read().await;
        Ok(storage.iter().find(|o| o.id() == *id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<LogisticOperator>> {
        let storage = self.storage.read().await;
        Ok(storage.clone())
    }

    async fn delete(&self, id: &OperatorId) -> RepositoryResult<bool> {
        let mut storage = self.storage.write().await;
        let before = storage.len();
        storage.retain(|o| o.id() != *id);
        Ok(storage.len() != before)
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}
