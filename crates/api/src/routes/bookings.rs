use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::domains::bookings::service;
use crate::domains::bookings::types::{
    Booking, BookingConfirmation, BookingListQuery, BookingListResponse, BookingRequest,
};
use crate::error::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::state::AppState;

pub async fn create_booking(
    State(state): State<AppState>,
    AppJson(req): AppJson<BookingRequest>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let confirmation =
        service::create_booking(state.store.as_ref(), state.club_id()?, req).await?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}

pub async fn list_bookings(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BookingListQuery>,
) -> Result<Json<BookingListResponse>, AppError> {
    let bookings = service::list_bookings(state.store.as_ref(), query.email.as_deref()).await?;
    Ok(Json(BookingListResponse {
        items: bookings.into_iter().map(Booking::from).collect(),
    }))
}

pub async fn cancel_booking(
    State(state): State<AppState>,
    AppPath(booking_id): AppPath<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking =
        service::cancel_booking(state.store.as_ref(), state.club_id()?, booking_id).await?;
    Ok(Json(booking.into()))
}
