//! # Operator Service
//!
//! Use case managing the logistic operator catalog.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{LogisticOperator, RateTier};
use crate::domain::value_objects::OperatorId;
use crate::infrastructure::persistence::OperatorRepository;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// Input for registering an operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOperator {
    /// Display name.
    pub name: String,
    /// Divisor converting volume into billable units.
    pub cubic_factor: Decimal,
    /// Rate for distances up to 100 km.
    pub base: RateTier,
    /// Rate for distances up to 500 km.
    pub mid: RateTier,
    /// Rate beyond 500 km.
    pub far: RateTier,
}

/// Catalog management over an [`OperatorRepository`].
#[derive(Debug, Clone)]
pub struct OperatorService {
    operators: Arc<dyn OperatorRepository>,
}

impl OperatorService {
    /// Creates a new service.
    #[must_use]
    pub fn new(operators: Arc<dyn OperatorRepository>) -> Self {
        Self { operators }
    }

    /// Validates and registers an operator.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Domain` for a blank name, a non-positive
    /// cubic factor, or a negative multiplier.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewOperator) -> ApplicationResult<LogisticOperator> {
        let operator =
            LogisticOperator::new(input.name, input.cubic_factor, input.base, input.mid, input.far)?;
        self.operators.save(&operator).await?;
        info!(operator_id = %operator.id(), "operator registered");
        Ok(operator)
    }

    /// Lists the catalog in order.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::PersistenceFailed` if the store fails.
    pub async fn find_all(&self) -> ApplicationResult<Vec<LogisticOperator>> {
        Ok(self.operators.find_all().await?)
    }

    /// Loads one operator.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no operator has this ID.
    pub async fn find_one(&self, id: OperatorId) -> ApplicationResult<LogisticOperator> {
        self.operators
            .get(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("LogisticOperator", id))
    }

    /// Removes an operator from the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no operator has this ID.
    #[instrument(skip(self), fields(operator_id = %id))]
    pub async fn remove(&self, id: OperatorId) -> ApplicationResult<()> {
        if self.operators.delete(&id).await? {
            Ok(())
        } else {
            Err(ApplicationError::not_found("LogisticOperator", id))
        }
    }
}
