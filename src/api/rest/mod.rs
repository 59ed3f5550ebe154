//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! ## Simulations
//! - `POST /api/v1/simulations` - Compute and store a quote
//! - `GET /api/v1/simulations` - List stored simulations
//! - `GET /api/v1/simulations/{id}` - Get a simulation
//! - `PATCH /api/v1/simulations/{id}` - Update stored fields
//! - `DELETE /api/v1/simulations/{id}` - Delete a simulation
//!
//! ## Operators
//! - `GET /api/v1/operators` - List the catalog
//! - `POST /api/v1/operators` - Register an operator
//! - `GET /api/v1/operators/{id}` - Get an operator
//! - `DELETE /api/v1/operators/{id}` - Remove an operator
//!
//! ## Health
//! - `GET /api/v1/health` - Health check endpoint
//!
//! Failures return `{"error": kind, "message": text}`.
//!
//! # Usage
//!
//! ```ignore
//! use shipping_quote::api::rest::{create_router, AppState};
//!
//! let router = create_router(AppState { simulations, operators });
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5001").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{ApiError, AppState, ErrorResponse, HealthResponse};
pub use routes::create_router;
