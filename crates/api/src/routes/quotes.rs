use axum::{extract::State, Json};

use crate::domains::catalog;
use crate::domains::pricing::service;
use crate::domains::pricing::types::{Quote, QuoteRequest};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::state::AppState;

pub async fn get_quote(
    State(state): State<AppState>,
    AppJson(req): AppJson<QuoteRequest>,
) -> Result<Json<Quote>, AppError> {
    let umbrella_id = catalog::service::parse_umbrella_id(req.umbrella_id.as_deref())?;
    let quote = service::quote(
        state.store.as_ref(),
        state.club_id()?,
        umbrella_id,
        &req.slot,
        &req.services,
    )
    .await?;
    Ok(Json(quote))
}
