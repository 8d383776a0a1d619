use axum::{
    extract::State,
    Json,
};

use crate::domains::availability::service;
use crate::domains::availability::types::{AvailabilityQuery, AvailabilityResponse};
use crate::error::AppError;
use crate::extract::AppQuery;
use crate::state::AppState;

pub async fn check_availability(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    // Date is validated before the club lookup, so a malformed date is always a 400
    let booking_date = service::parse_booking_date(&query.date)?;
    let availability = service::check_availability(
        state.store.as_ref(),
        state.club_id()?,
        booking_date,
        &query.slot,
    )
    .await?;

    Ok(Json(AvailabilityResponse {
        date: booking_date.format("%Y-%m-%d").to_string(),
        slot: query.slot,
        availability,
    }))
}
