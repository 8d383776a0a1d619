mod common;

use std::sync::Arc;

use api::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use infra::MemoryStore;
use serde_json::json;

#[tokio::test]
async fn test_banner_and_health() {
    let (state, store) = setup_test_state().await;
    let router = test_router(state);

    let (status, body) = send(&router, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"name": "Ombrellone API", "status": "ok"}));

    let (status, _) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::OK);

    store.set_offline(true);
    let (status, body) = send(&router, get("/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
}

#[tokio::test]
async fn test_club_and_map() {
    let (state, _store) = setup_test_state().await;
    let router = test_router(state);

    let (status, club) = send(&router, get("/api/club")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(club["name"], "Lido Mare Blu");
    assert_eq!(club["currency"], "EUR");
    assert_eq!(club["services"][1]["billing"], "per_slot");
    assert_eq!(club["services"].as_array().unwrap().len(), 3);

    let (status, map) = send(&router, get("/api/map")).await;
    assert_eq!(status, StatusCode::OK);
    let umbrellas = map["umbrellas"].as_array().unwrap();
    assert_eq!(umbrellas.len(), 32);
    assert_eq!(umbrellas[0]["number"], 1);
    assert_eq!(umbrellas[0]["row"], 1);
    assert_eq!(umbrellas[0]["base_price_day_cents"], 5000);
    assert_eq!(umbrellas[31]["base_price_slot_cents"], 2300);
}

#[tokio::test]
async fn test_missing_club_maps_to_404() {
    let state = AppState::new(Arc::new(MemoryStore::new()), None);
    let router = test_router(state);

    for uri in ["/api/club", "/api/map", "/api/availability?date=2025-07-14"] {
        let (status, body) = send(&router, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body["error"].as_str().unwrap().contains("Club not found"));
    }
}

#[tokio::test]
async fn test_availability_endpoint() {
    let (state, _store) = setup_test_state().await;
    let router = test_router(state);

    let (status, body) = send(&router, get("/api/availability?date=2025-07-14")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2025-07-14");
    assert_eq!(body["slot"], "Full Day", "slot defaults to a full day");
    let entries = body["availability"].as_array().unwrap();
    assert_eq!(entries.len(), 32);
    assert!(entries.iter().all(|e| e["status"] == "available"));

    let (status, body) = send(&router, get("/api/availability?date=14-07-2025")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn test_quote_endpoint() {
    let (state, _store) = setup_test_state().await;
    let umbrella = umbrella_by_number(&state, 1).await;
    let router = test_router(state);

    let (status, quote) = send(
        &router,
        post_json(
            "/api/quote",
            json!({"umbrella_id": umbrella.id, "slot": "Full Day", "services": ["towel", "drinks"]}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["base_cents"], 5000);
    assert_eq!(quote["total_cents"], 6300);
    assert_eq!(quote["extras"][1]["key"], "drinks");
    assert_eq!(quote["extras"][1]["price_cents"], 1000);

    // Slot and services are optional
    let (status, quote) = send(
        &router,
        post_json("/api/quote", json!({"umbrella_id": umbrella.id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["total_cents"], 5000);
    assert_eq!(quote["extras"], json!([]));

    let (status, _) = send(
        &router,
        post_json("/api/quote", json!({"umbrella_id": unknown_id()})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_flow_over_http() {
    let (state, _store) = setup_test_state().await;
    let umbrella = umbrella_by_number(&state, 6).await;
    let router = test_router(state);

    let payload = json!({
        "umbrella_id": umbrella.id,
        "umbrella_number": 6,
        "booking_date": "2025-07-14",
        "slot": "08:00-12:00",
        "services": ["drinks"],
        "customer_name": "Marco Bianchi",
        "customer_email": "marco@example.com"
    });

    let (status, created) = send(&router, post_json("/api/book", payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["status"], "confirmed");
    assert_eq!(created["quote"]["total_cents"], 1700 + 500);
    let booking_id = created["booking_id"].as_str().unwrap().to_string();

    let (status, body) = send(&router, post_json("/api/book", payload.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("already booked for selected time"));

    let (_, availability) = send(
        &router,
        get("/api/availability?date=2025-07-14&slot=08:00-12:00"),
    )
    .await;
    let entry = availability["availability"]
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["number"] == 6)
        .unwrap();
    assert_eq!(entry["status"], "occupied");

    let (_, other_slot) = send(
        &router,
        get("/api/availability?date=2025-07-14&slot=Full%20Day"),
    )
    .await;
    assert!(other_slot["availability"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["status"] == "available"));

    let (status, list) = send(&router, get("/api/bookings?email=marco@example.com")).await;
    assert_eq!(status, StatusCode::OK);
    let items = list["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["booking_date"], "2025-07-14");
    assert_eq!(items[0]["guests"], 2, "guests default to 2");
    assert_eq!(items[0]["total_amount_cents"], 2200);

    let (status, cancelled) = send(
        &router,
        post_json(&format!("/api/bookings/{booking_id}/cancel"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["status"], "cancelled");

    let (status, _) = send(&router, post_json("/api/book", payload)).await;
    assert_eq!(status, StatusCode::CREATED, "cancelled booking released the slot");
}

#[tokio::test]
async fn test_booking_rejects_invalid_payload() {
    let (state, _store) = setup_test_state().await;
    let umbrella = umbrella_by_number(&state, 2).await;
    let router = test_router(state);

    let (status, body) = send(
        &router,
        post_json(
            "/api/book",
            json!({
                "umbrella_id": umbrella.id,
                "umbrella_number": 2,
                "booking_date": "2025-07-14",
                "slot": "Full Day",
                "guests": 12,
                "customer_name": "Anna",
                "customer_email": "anna@example.com"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Guests"));
}

#[tokio::test]
async fn test_store_outage_maps_to_503() {
    let (state, store) = setup_test_state().await;
    let router = test_router(state);

    store.set_offline(true);
    let (status, body) = send(&router, get("/api/map")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body["error"],
        "service unavailable: Storage backend is not reachable"
    );
}

#[tokio::test]
async fn test_unresolvable_umbrella_id_is_not_found() {
    let (state, _store) = setup_test_state().await;
    let router = test_router(state);

    let payloads = [
        json!({"umbrella_id": "abc", "slot": "Full Day"}),
        json!({"slot": "Full Day"}),
        json!({"umbrella_id": null}),
    ];
    for payload in payloads {
        let (status, body) = send(&router, post_json("/api/quote", payload.clone())).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{payload}");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Umbrella not found"));
    }

    let (status, body) = send(
        &router,
        post_json(
            "/api/book",
            json!({
                "umbrella_id": "not-a-uuid",
                "umbrella_number": 1,
                "booking_date": "2025-07-14",
                "slot": "Full Day",
                "customer_name": "Anna",
                "customer_email": "anna@example.com"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Umbrella not found"));
}

#[tokio::test]
async fn test_malformed_body_is_json_bad_request() {
    let (state, _store) = setup_test_state().await;
    let router = test_router(state);

    let request = Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header("content-type", "application/json")
        .body(Body::from("{\"umbrella_id\": "))
        .expect("valid request");
    let (status, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // Wrong field type in an otherwise valid document
    let (status, body) = send(
        &router,
        post_json("/api/book", json!({"umbrella_number": "six"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_availability_query_params() {
    let (state, _store) = setup_test_state().await;
    let router = test_router(state);

    let (status, body) = send(&router, get("/api/availability?booking_date=2025-07-14")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2025-07-14");
    assert_eq!(body["availability"].as_array().unwrap().len(), 32);

    let (status, body) = send(&router, get("/api/availability")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    for uri in [
        "/api/availability?date=2025-7-4",
        "/api/availability?date=2025-07-4",
    ] {
        let (status, body) = send(&router, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
    }
}

#[tokio::test]
async fn test_cancel_with_malformed_id_is_not_found() {
    let (state, _store) = setup_test_state().await;
    let router = test_router(state);

    let (status, body) = send(
        &router,
        post_json("/api/bookings/not-a-uuid/cancel", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}
