use chrono::NaiveDate;
use infra::models::{BookingRow, NewBooking};
use infra::repos::BookingStatus;
use infra::Store;
use uuid::Uuid;

use super::types::{BookingConfirmation, BookingRequest, MAX_GUESTS, MIN_GUESTS};
use crate::domains::{availability, catalog, pricing};
use crate::error::AppError;

const ALREADY_BOOKED: &str = "Umbrella already booked for selected time";

/// Status given to new bookings. Payment is not integrated, so bookings skip `Pending`.
const INITIAL_STATUS: BookingStatus = BookingStatus::Confirmed;

/// Field-level checks that need no store access.
pub fn validate_request(req: &BookingRequest) -> Result<NaiveDate, AppError> {
    let booking_date = availability::service::parse_booking_date(&req.booking_date)?;

    if req.slot.trim().is_empty() {
        return Err(AppError::InvalidInput("Slot is required".to_string()));
    }
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&req.guests) {
        return Err(AppError::InvalidInput(format!(
            "Guests must be between {MIN_GUESTS} and {MAX_GUESTS}"
        )));
    }
    if req.customer_name.trim().is_empty() {
        return Err(AppError::InvalidInput("Customer name is required".to_string()));
    }
    let email = req.customer_email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::InvalidInput(
            "A valid customer email is required".to_string(),
        ));
    }

    Ok(booking_date)
}

/// Reserve an umbrella for a date and slot.
///
/// Order: conflict check, quote, conditional insert. The insert re-checks the
/// (umbrella, date, slot) key atomically, so a caller that loses a race after
/// passing the first check still gets `Conflict`.
pub async fn create_booking(
    store: &dyn Store,
    club_id: Uuid,
    req: BookingRequest,
) -> Result<BookingConfirmation, AppError> {
    let booking_date = validate_request(&req)?;
    let umbrella_id = catalog::service::parse_umbrella_id(req.umbrella_id.as_deref())?;

    if store
        .find_active_booking(umbrella_id, booking_date, &req.slot)
        .await?
        .is_some()
    {
        tracing::warn!(
            "Rejected booking for umbrella {} on {} / {}: already booked",
            umbrella_id,
            booking_date,
            req.slot
        );
        return Err(AppError::Conflict(ALREADY_BOOKED.to_string()));
    }

    let (umbrella, quote) = pricing::service::quote_with_umbrella(
        store,
        club_id,
        umbrella_id,
        &req.slot,
        &req.services,
    )
    .await?;

    if umbrella.number != req.umbrella_number {
        return Err(AppError::InvalidInput(format!(
            "Umbrella number {} does not match umbrella #{}",
            req.umbrella_number, umbrella.number
        )));
    }

    let inserted = store
        .insert_booking_if_free(NewBooking {
            club_id: umbrella.club_id,
            umbrella_id: umbrella.id,
            umbrella_number: umbrella.number,
            booking_date,
            slot: req.slot.clone(),
            guests: req.guests,
            services: req.services,
            customer_name: req.customer_name.trim().to_string(),
            customer_email: req.customer_email.trim().to_string(),
            total_amount_cents: quote.total_cents,
            status: INITIAL_STATUS,
        })
        .await?;

    let Some(booking) = inserted else {
        tracing::warn!(
            "Lost booking race for umbrella #{} on {} / {}",
            umbrella.number,
            booking_date,
            req.slot
        );
        return Err(AppError::Conflict(ALREADY_BOOKED.to_string()));
    };

    tracing::info!(
        "Booking {} confirmed: umbrella #{} on {} / {} for {} cents",
        booking.id,
        booking.umbrella_number,
        booking.booking_date,
        booking.slot,
        booking.total_amount_cents
    );

    Ok(BookingConfirmation {
        booking_id: booking.id,
        status: booking.status,
        quote,
    })
}

/// All bookings, newest first. A blank email means no filter.
pub async fn list_bookings(
    store: &dyn Store,
    customer_email: Option<&str>,
) -> Result<Vec<BookingRow>, AppError> {
    let email = customer_email.map(str::trim).filter(|e| !e.is_empty());
    Ok(store.list_bookings(email).await?)
}

/// Cancel an active booking, releasing its umbrella for that date and slot.
pub async fn cancel_booking(
    store: &dyn Store,
    club_id: Uuid,
    booking_id: Uuid,
) -> Result<BookingRow, AppError> {
    let booking = store
        .find_booking(booking_id)
        .await?
        .filter(|b| b.club_id == club_id)
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    if !booking.status.can_transition_to(BookingStatus::Cancelled) {
        return Err(AppError::Conflict(format!(
            "Booking is already {}",
            booking.status.as_str()
        )));
    }

    let cancelled = store
        .update_booking_status(booking.id, booking.status, BookingStatus::Cancelled)
        .await?
        .ok_or_else(|| AppError::Conflict("Booking changed concurrently".to_string()))?;

    tracing::info!(
        "Booking {} cancelled, umbrella #{} released for {} / {}",
        cancelled.id,
        cancelled.umbrella_number,
        cancelled.booking_date,
        cancelled.slot
    );

    Ok(cancelled)
}
