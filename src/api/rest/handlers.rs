//! # REST Handlers
//!
//! axum handlers, shared state, and error responses.

use crate::application::error::ApplicationError;
use crate::application::services::{QuoteError, QuoteResult};
use crate::application::use_cases::{NewOperator, OperatorService, SimulationService};
use crate::domain::entities::{LogisticOperator, NewSimulation, Simulation, SimulationPatch};
use crate::domain::value_objects::{OperatorId, SimulationId};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Quote and simulation use cases.
    pub simulations: SimulationService,
    /// Operator catalog use cases.
    pub operators: OperatorService,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable kind.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Response wrapper for [`ApplicationError`].
#[derive(Debug)]
pub struct ApiError(pub ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        Self(error)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ApplicationError::Domain(_) | ApplicationError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::Quote(QuoteError::NoOperatorsAvailable)
            | ApplicationError::Quote(QuoteError::Configuration { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApplicationError::CoordinateResolutionFailed { .. } => StatusCode::BAD_GATEWAY,
            ApplicationError::PersistenceFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::debug!(error = %self.0, "request rejected");
        }

        let body = ErrorResponse {
            error: self.0.kind().to_string(),
            message: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// `GET /api/v1/health`
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `POST /api/v1/simulations`
pub async fn create_simulation(
    State(state): State<AppState>,
    Json(input): Json<NewSimulation>,
) -> ApiResult<(StatusCode, Json<QuoteResult>)> {
    let result = state.simulations.create(input).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// `GET /api/v1/simulations`
pub async fn list_simulations(State(state): State<AppState>) -> ApiResult<Json<Vec<Simulation>>> {
    Ok(Json(state.simulations.find_all().await?))
}

/// `GET /api/v1/simulations/{id}`
pub async fn get_simulation(
    State(state): State<AppState>,
    Path(id): Path<SimulationId>,
) -> ApiResult<Json<Simulation>> {
    Ok(Json(state.simulations.find_one(id).await?))
}

/// `PATCH /api/v1/simulations/{id}`
pub async fn update_simulation(
    State(state): State<AppState>,
    Path(id): Path<SimulationId>,
    Json(patch): Json<SimulationPatch>,
) -> ApiResult<Json<Simulation>> {
    Ok(Json(state.simulations.update(id, patch).await?))
}

/// `DELETE /api/v1/simulations/{id}`
pub async fn delete_simulation(
    State(state): State<AppState>,
    Path(id): Path<SimulationId>,
) -> ApiResult<StatusCode> {
    state.simulations.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/v1/operators`
pub async fn list_operators(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LogisticOperator>>> {
    Ok(Json(state.operators.find_all().await?))
}

/// `POST /api/v1/operators`
pub async fn create_operator(
    State(state): State<AppState>,
    Json(input): Json<NewOperator>,
) -> ApiResult<(StatusCode, Json<LogisticOperator>)> {
    let operator = state.operators.create(input).await?;
    Ok((StatusCode::CREATED, Json(operator)))
}

/// `GET /api/v1/operators/{id}`
pub async fn get_operator(
    State(state): State<AppState>,
    Path(id): Path<OperatorId>,
) -> ApiResult<Json<LogisticOperator>> {
    Ok(Json(state.operators.find_one(id).await?))
}

/// `DELETE /api/v1/operators/{id}`
pub async fn delete_operator(
    State(state): State<AppState>,
    Path(id): Path<OperatorId>,
) -> ApiResult<StatusCode> {
    state.operators.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
