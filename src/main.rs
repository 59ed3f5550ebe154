//! Shipping quote service binary.

use anyhow::Context;
use rust_decimal::Decimal;
use shipping_quote::api::rest::{AppState, create_router};
use shipping_quote::application::use_cases::{OperatorService, SimulationService};
use shipping_quote::config::AppConfig;
use shipping_quote::domain::entities::{LogisticOperator, RateTier};
use shipping_quote::infrastructure::geocoding::{Geocoder, GoogleGeocoder, StaticGeocoder};
use shipping_quote::infrastructure::persistence::in_memory::{
    InMemoryOperatorRepository, InMemorySimulationRepository,
};
use shipping_quote::telemetry;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    telemetry::init_tracing(&config.logging)?;

    let geocoder: Arc<dyn Geocoder> = if config.geocoding.api_key.is_empty() {
        warn!("geocoding.api_key is empty, only statically known addresses will resolve");
        Arc::new(StaticGeocoder::new())
    } else {
        Arc::new(GoogleGeocoder::new(
            &config.geocoding.base_url,
            config.geocoding.api_key.clone(),
            config.geocoding.timeout_ms,
        )?)
    };

    let operators = Arc::new(InMemoryOperatorRepository::with_operators(
        sample_operators().context("building sample operators")?,
    ));
    let simulations = Arc::new(InMemorySimulationRepository::new());

    let state = AppState {
        simulations: SimulationService::new(simulations, operators.clone(), geocoder),
        operators: OperatorService::new(operators),
    };
    let router = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("binding {address}"))?;
    info!(%address, "shipping quote service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

fn sample_operators() -> anyhow::Result<Vec<LogisticOperator>> {
    Ok(vec![
        LogisticOperator::new(
            "Logistic Operator 1",
            Decimal::from(6000),
            RateTier::new(1, Decimal::from(10)),
            RateTier::new(3, Decimal::from(12)),
            RateTier::new(5, Decimal::from(15)),
        )?,
        LogisticOperator::new(
            "Logistic Operator 2",
            Decimal::from(5000),
            RateTier::new(2, Decimal::from(8)),
            RateTier::new(4, Decimal::from(10)),
            RateTier::new(7, Decimal::from(11)),
        )?,
    ])
}
