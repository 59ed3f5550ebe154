//! End-to-end tests driving the REST router in process.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use shipping_quote::api::rest::{AppState, create_router};
use shipping_quote::application::use_cases::{OperatorService, SimulationService};
use shipping_quote::domain::entities::{LogisticOperator, RateTier};
use shipping_quote::domain::value_objects::Coordinate;
use shipping_quote::infrastructure::geocoding::StaticGeocoder;
use shipping_quote::infrastructure::persistence::in_memory::{
    InMemoryOperatorRepository, InMemorySimulationRepository,
};
use std::sync::Arc;
use tower::ServiceExt;

const ORIGIN: &str = "Rua das Flores, 10";
const DESTINATION: &str = "Rua dos Ipes, 20";

fn flat(name: &str, cubic_factor: Decimal, time: u32, multiplier: Decimal) -> LogisticOperator {
    let tier = RateTier::new(time, multiplier);
    LogisticOperator::new(name, cubic_factor, tier, tier, tier).unwrap()
}

fn app_with(operators: Vec<LogisticOperator>) -> Router {
    let geocoder = StaticGeocoder::new()
        .with(ORIGIN, Coordinate::new(0.0, 0.0).unwrap())
        .with(DESTINATION, Coordinate::new(0.0, 1.0).unwrap());
    let operators = Arc::new(InMemoryOperatorRepository::with_operators(operators));
    let simulations = Arc::new(InMemorySimulationRepository::new());

    create_router(AppState {
        simulations: SimulationService::new(simulations, operators.clone(), Arc::new(geocoder)),
        operators: OperatorService::new(operators),
    })
}

fn app() -> Router {
    app_with(vec![
        flat("Logistic Operator 1", dec!(300), 10, dec!(10)),
        flat("Logistic Operator 2", dec!(500), 20, dec!(5)),
    ])
}

fn simulation_body() -> Value {
    json!({
        "clientName": "Client 1",
        "fromAddress": ORIGIN,
        "toAddress": DESTINATION,
        "productHeight": 10,
        "productWidth": 10,
        "productLength": 10
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn decimal(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().unwrap(),
        other => other.to_string().parse().unwrap(),
    }
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), "GET", "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_simulation_returns_reference_quote() {
    let (status, body) = send(&app(), "POST", "/api/v1/simulations", Some(simulation_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["clientName"], "Client 1");
    assert_eq!(body["distance"].as_f64(), Some(111.195));
    assert_eq!(body["fasterOperator"]["name"], "Logistic Operator 1");
    assert_eq!(body["fasterOperatorTime"], 10);
    assert_eq!(decimal(&body["fasterOperatorPrice"]), dec!(33.33));
    assert_eq!(body["cheaperOperator"]["name"], "Logistic Operator 2");
    assert_eq!(decimal(&body["cheaperOperatorPrice"]), dec!(10));
    assert!(body["fasterOperatorPrice"].is_number());
    assert!(body["productHeight"].is_number());
    assert_eq!(body["cheaperOperatorTime"], 20);
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn created_simulation_can_be_read_patched_and_deleted() {
    let app = app();
    let (_, created) = send(&app, "POST", "/api/v1/simulations", Some(simulation_body())).await;
    let uri = format!("/api/v1/simulations/{}", created["id"].as_str().unwrap());

    let (status, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["fromAddress"], ORIGIN);

    let (status, patched) = send(&app, "PATCH", &uri, Some(json!({"clientName": "Client 2"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["clientName"], "Client 2");
    assert_eq!(patched["toAddress"], DESTINATION);

    let (status, list) = send(&app, "GET", "/api/v1/simulations", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn invalid_dimensions_are_bad_request() {
    let mut body = simulation_body();
    body["productWidth"] = json!(0);

    let (status, error) = send(&app(), "POST", "/api/v1/simulations", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "validation_error");
    assert!(error["message"].as_str().unwrap().contains("width"));
}

#[tokio::test]
async fn oversized_package_is_bad_request() {
    let mut body = simulation_body();
    for side in ["productHeight", "productWidth", "productLength"] {
        body[side] = json!(100_000_000_000_u64);
    }

    let (status, error) = send(&app(), "POST", "/api/v1/simulations", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "validation_error");
    assert!(error["message"].as_str().unwrap().contains("volume"));
}

#[tokio::test]
async fn unknown_address_is_bad_gateway() {
    let mut body = simulation_body();
    body["toAddress"] = json!("Unknown Street");

    let (status, error) = send(&app(), "POST", "/api/v1/simulations", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(error["error"], "coordinate_resolution_failed");
}

#[tokio::test]
async fn empty_catalog_is_unprocessable() {
    let (status, error) = send(
        &app_with(Vec::new()),
        "POST",
        "/api/v1/simulations",
        Some(simulation_body()),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["error"], "no_operators_available");
}

#[tokio::test]
async fn operator_catalog_management() {
    let app = app_with(Vec::new());
    let tier = json!({"deliveryTime": 2, "distanceMultiplier": 3});
    let new_operator = json!({
        "name": "Carrier",
        "cubicFactor": 300,
        "base": tier,
        "mid": tier,
        "far": tier
    });

    let (status, created) = send(&app, "POST", "/api/v1/operators", Some(new_operator)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Carrier");

    let uri = format!("/api/v1/operators/{}", created["id"].as_str().unwrap());
    let (status, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);

    let (status, list) = send(&app, "GET", "/api/v1/operators", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn operator_with_zero_cubic_factor_is_rejected() {
    let tier = json!({"deliveryTime": 1, "distanceMultiplier": 1});
    let body = json!({"name": "Bad", "cubicFactor": 0, "base": tier, "mid": tier, "far": tier});

    let (status, error) = send(&app_with(Vec::new()), "POST", "/api/v1/operators", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "validation_error");
}
