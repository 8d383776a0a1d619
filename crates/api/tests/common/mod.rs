use std::env;
use std::sync::Arc;

use api::config::AppConfig;
use api::domains::bookings::types::BookingRequest;
use api::domains::catalog;
use api::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use infra::models::UmbrellaRow;
use infra::{MemoryStore, PgStore};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Seeded in-memory deployment. The store handle is returned for fault injection.
pub async fn setup_test_state() -> (AppState, MemoryStore) {
    let store = MemoryStore::new();
    let outcome = catalog::service::seed_if_empty(&store)
        .await
        .expect("Failed to seed memory store");

    let state = AppState::new(Arc::new(store.clone()), Some(outcome.club_id));
    (state, store)
}

/// Postgres-backed state, only when `TEST_DATABASE_URL` is set.
#[allow(dead_code)]
pub async fn setup_pg_store() -> Option<PgStore> {
    let database_url = env::var("TEST_DATABASE_URL").ok()?;

    let store = PgStore::connect(&database_url, 5)
        .await
        .expect("Failed to connect to test database");
    sqlx::migrate!("../../migrations")
        .run(store.pool())
        .await
        .expect("Failed to run migrations");

    Some(store)
}

#[allow(dead_code)]
pub fn test_router(state: AppState) -> Router {
    api::app::build_router(state, &AppConfig::default())
}

#[allow(dead_code)]
pub async fn umbrella_by_number(state: &AppState, number: i32) -> UmbrellaRow {
    let club_id = state.club_id().expect("club configured");
    catalog::service::list_map(state.store.as_ref(), club_id)
        .await
        .expect("Failed to list umbrellas")
        .into_iter()
        .find(|u| u.number == number)
        .unwrap_or_else(|| panic!("umbrella #{number} not seeded"))
}

#[allow(dead_code)]
pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid test date")
}

#[allow(dead_code)]
pub fn booking_request(umbrella: &UmbrellaRow, booking_date: &str, slot: &str) -> BookingRequest {
    BookingRequest {
        umbrella_id: Some(umbrella.id.to_string()),
        umbrella_number: umbrella.number,
        booking_date: booking_date.to_string(),
        slot: slot.to_string(),
        guests: 2,
        services: Vec::new(),
        customer_name: "Giulia Rossi".to_string(),
        customer_email: "giulia@example.com".to_string(),
    }
}

/// Drive one request through the router and decode the JSON body (Null when empty or not JSON).
#[allow(dead_code)]
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

#[allow(dead_code)]
pub fn unknown_id() -> Uuid {
    Uuid::new_v4()
}
