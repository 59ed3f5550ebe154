//! # Simulation Entity
//!
//! A persisted shipping quote request: who asked, between which addresses,
//! and for what package.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ProductDimensions, SimulationId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Input for creating a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSimulation {
    /// Name of the requesting client.
    pub client_name: String,
    /// Origin address, free text.
    pub from_address: String,
    /// Destination address, free text.
    pub to_address: String,
    /// Package height in centimeters.
    pub product_height: Decimal,
    /// Package width in centimeters.
    pub product_width: Decimal,
    /// Package length in centimeters.
    pub product_length: Decimal,
}

impl NewSimulation {
    /// Checks required text fields and returns the validated dimensions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` for a blank name or address.
    /// Returns `DomainError::InvalidDimensions` for a non-positive measurement
    /// or a volume too large to represent.
    pub fn validate(&self) -> DomainResult<ProductDimensions> {
        require_text("client_name", &self.client_name)?;
        require_text("from_address", &self.from_address)?;
        require_text("to_address", &self.to_address)?;
        self.dimensions()
    }

    /// Returns the package dimensions.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDimensions` for a non-positive measurement
    /// or a volume too large to represent.
    pub fn dimensions(&self) -> DomainResult<ProductDimensions> {
        ProductDimensions::new(
            self.product_height,
            self.product_width,
            self.product_length,
        )
    }
}

/// Partial update of a stored simulation. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationPatch {
    /// New client name.
    pub client_name: Option<String>,
    /// New origin address.
    pub from_address: Option<String>,
    /// New destination address.
    pub to_address: Option<String>,
    /// New height.
    pub product_height: Option<Decimal>,
    /// New width.
    pub product_width: Option<Decimal>,
    /// New length.
    pub product_length: Option<Decimal>,
}

impl SimulationPatch {
    /// Returns true if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A stored simulation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    id: SimulationId,
    client_name: String,
    from_address: String,
    to_address: String,
    #[serde(with = "rust_decimal::serde::float")]
    product_height: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    product_width: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    product_length: Decimal,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Simulation {
    /// Creates a record from input, assigning a fresh ID and timestamps.
    #[must_use]
    pub fn from_new(input: NewSimulation) -> Self {
        let now = Timestamp::now();
        Self {
            id: SimulationId::new_v4(),
            client_name: input.client_name,
            from_address: input.from_address,
            to_address: input.to_address,
            product_height: input.product_height,
            product_width: input.product_width,
            product_length: input.product_length,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a patch, validating the resulting record.
    ///
    /// The record is left untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingField` or `DomainError::InvalidDimensions`
    /// if the patched record would be invalid.
    pub fn apply(&mut self, patch: SimulationPatch) -> DomainResult<()> {
        let candidate = NewSimulation {
            client_name: patch.client_name.unwrap_or_else(|| self.client_name.clone()),
            from_address: patch.from_address.unwrap_or_else(|| self.from_address.clone()),
            to_address: patch.to_address.unwrap_or_else(|| self.to_address.clone()),
            product_height: patch.product_height.unwrap_or(self.product_height),
            product_width: patch.product_width.unwrap_or(self.product_width),
            product_length: patch.product_length.unwrap_or(self.product_length),
        };
        candidate.validate()?;

        self.client_name = candidate.client_name;
        self.from_address = candidate.from_address;
        self.to_address = candidate.to_address;
        self.product_height = candidate.product_height;
        self.product_width = candidate.product_width;
        self.product_length = candidate.product_length;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Returns the simulation ID.
    #[inline]
    #[must_use]
    pub fn id(&self) -> SimulationId {
        self.id
    }

    /// Returns the client name.
    #[inline]
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the origin address.
    #[inline]
    #[must_use]
    pub fn from_address(&self) -> &str {
        &self.from_address
    }

    /// Returns the destination address.
    #[inline]
    #[must_use]
    pub fn to_address(&self) -> &str {
        &self.to_address
    }

    /// Returns the package height.
    #[inline]
    #[must_use]
    pub fn product_height(&self) -> Decimal {
        self.product_height
    }

    /// Returns the package width.
    #[inline]
    #[must_use]
    pub fn product_width(&self) -> Decimal {
        self.product_width
    }

    /// Returns the package length.
    #[inline]
    #[must_use]
    pub fn product_length(&self) -> Decimal {
        self.product_length
    }

    /// Returns when the record was created.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the record was last updated.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Simulation({} {} -> {})",
            self.id, self.from_address, self.to_address
        )
    }
}

fn require_text(field: &'static str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}
