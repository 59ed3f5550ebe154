//! # REST Routes
//!
//! Router construction.

use crate::api::rest::handlers::{
    AppState, create_operator, create_simulation, delete_operator, delete_simulation,
    get_operator, get_simulation, health, list_operators, list_simulations, update_simulation,
};
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the application router with tracing and CORS layers.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route(
            "/simulations",
            get(list_simulations).post(create_simulation),
        )
        .route(
            "/simulations/{id}",
            get(get_simulation)
                .patch(update_simulation)
                .delete(delete_simulation),
        )
        .route("/operators", get(list_operators).post(create_operator))
        .route("/operators/{id}", get(get_operator).delete(delete_operator));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
