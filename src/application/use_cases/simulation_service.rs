//! # Simulation Service
//!
//! Use case computing and storing shipping quotes.
//!
//! # Flow
//!
//! 1. Validate the request (names, addresses, dimensions)
//! 2. Resolve destination, then origin coordinates
//! 3. Compute the great-circle distance
//! 4. Load the operator catalog once
//! 5. Select the fastest and the cheapest operator
//! 6. Store the simulation record
//! 7. Assemble the [`QuoteResult`]
//!
//! A failure at any step aborts the request; nothing is stored unless the
//! quote was computed.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::{QuoteEngine, QuoteResult, assemble};
use crate::domain::entities::{NewSimulation, Simulation, SimulationPatch};
use crate::domain::services::distance_between;
use crate::domain::value_objects::{Coordinate, SimulationId};
use crate::infrastructure::geocoding::Geocoder;
use crate::infrastructure::persistence::{OperatorRepository, SimulationRepository};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Orchestrates quote computation and simulation storage.
#[derive(Debug, Clone)]
pub struct SimulationService {
    simulations: Arc<dyn SimulationRepository>,
    operators: Arc<dyn OperatorRepository>,
    geocoder: Arc<dyn Geocoder>,
    engine: QuoteEngine,
}

impl SimulationService {
    /// Creates a service using the default fastest/cheapest engine.
    #[must_use]
    pub fn new(
        simulations: Arc<dyn SimulationRepository>,
        operators: Arc<dyn OperatorRepository>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self::with_engine(simulations, operators, geocoder, QuoteEngine::default())
    }

    /// Creates a service with an explicit engine.
    #[must_use]
    pub fn with_engine(
        simulations: Arc<dyn SimulationRepository>,
        operators: Arc<dyn OperatorRepository>,
        geocoder: Arc<dyn Geocoder>,
        engine: QuoteEngine,
    ) -> Self {
        Self {
            simulations,
            operators,
            geocoder,
            engine,
        }
    }

    /// Computes a quote for the request and stores it.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` if the request is invalid
    /// - `ApplicationError::CoordinateResolutionFailed` if an address cannot
    ///   be geocoded
    /// - `ApplicationError::Quote` if no operator is available or one is
    ///   misconfigured
    /// - `ApplicationError::PersistenceFailed` if loading operators or
    ///   storing the record fails
    #[instrument(skip(self, input), fields(client = %input.client_name))]
    pub async fn create(&self, input: NewSimulation) -> ApplicationResult<QuoteResult> {
        let dimensions = input.validate()?;

        let destination = self.resolve(&input.to_address).await?;
        let origin = self.resolve(&input.from_address).await?;
        let distance = distance_between(&origin, &destination);

        let operators = self.operators.find_all().await?;
        let selection = self
            .engine
            .select_operators(distance, &dimensions, &operators)?;

        info!(
            distance_km = distance,
            faster = %selection.faster,
            cheaper = %selection.cheaper,
            "operators selected"
        );

        let record = self.simulations.create(input).await?;
        Ok(assemble(record, distance, selection))
    }

    /// Lists stored simulations, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::PersistenceFailed` if the store fails.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ApplicationResult<Vec<Simulation>> {
        Ok(self.simulations.find_all().await?)
    }

    /// Loads one simulation.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no record has this ID.
    #[instrument(skip(self), fields(simulation_id = %id))]
    pub async fn find_one(&self, id: SimulationId) -> ApplicationResult<Simulation> {
        self.simulations
            .get(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Simulation", id))
    }

    /// Applies a partial update to a stored simulation.
    ///
    /// The stored quote is not recomputed.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no record has this ID and
    /// `ApplicationError::Domain` if the patched record would be invalid.
    #[instrument(skip(self, patch), fields(simulation_id = %id))]
    pub async fn update(
        &self,
        id: SimulationId,
        patch: SimulationPatch,
    ) -> ApplicationResult<Simulation> {
        let mut record = self.find_one(id).await?;
        record.apply(patch)?;
        self.simulations.update(&record).await?;
        Ok(record)
    }

    /// Deletes a stored simulation.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if no record has this ID.
    #[instrument(skip(self), fields(simulation_id = %id))]
    pub async fn remove(&self, id: SimulationId) -> ApplicationResult<()> {
        if self.simulations.delete(&id).await? {
            Ok(())
        } else {
            Err(ApplicationError::not_found("Simulation", id))
        }
    }

    async fn resolve(&self, address: &str) -> ApplicationResult<Coordinate> {
        self.geocoder.coordinates(address).await.map_err(|e| {
            warn!(
                geocoder = self.geocoder.name(),
                address,
                error = %e,
                "coordinate resolution failed"
            );
            ApplicationError::coordinate_resolution(address, e)
        })
    }
}
