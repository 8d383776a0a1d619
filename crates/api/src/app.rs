use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::routes::{availability, bookings, catalog, quotes, system};
use crate::state::AppState;

/// Build the Axum router with the booking API, health endpoint and default middlewares.
pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let api = Router::new()
        .route("/club", get(catalog::get_club))
        .route("/map", get(catalog::get_map))
        .route("/availability", get(availability::check_availability))
        .route("/quote", post(quotes::get_quote))
        .route("/book", post(bookings::create_booking))
        .route("/bookings", get(bookings::list_bookings))
        .route("/bookings/{id}/cancel", post(bookings::cancel_booking));

    Router::new()
        .route("/", get(system::root))
        // Simple liveness check; also proves store connectivity.
        .route("/health", get(system::health))
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(cors_layer(config))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    if config.allows_any_origin() {
        // Credentials cannot be combined with a wildcard origin
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    cors.allow_origin(origins).allow_credentials(true)
}
