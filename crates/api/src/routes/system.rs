use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Banner {
    pub name: &'static str,
    pub status: &'static str,
}

pub async fn root() -> Json<Banner> {
    Json(Banner {
        name: "Ombrellone API",
        status: "ok",
    })
}

/// Liveness plus a quick store round trip.
pub async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await?;
    Ok("ok")
}
