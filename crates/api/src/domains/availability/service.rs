use std::collections::HashSet;

use chrono::NaiveDate;
use infra::Store;
use uuid::Uuid;

use super::types::{AvailabilityStatus, UmbrellaAvailability};
use crate::domains::catalog;
use crate::error::AppError;

/// Strict ISO calendar date (`YYYY-MM-DD`, zero padded). No range restriction.
pub fn parse_booking_date(raw: &str) -> Result<NaiveDate, AppError> {
    let invalid = || AppError::InvalidInput("Invalid date format. Use YYYY-MM-DD".to_string());

    // chrono accepts unpadded fields, so check the layout first
    if !is_padded_iso_date(raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

fn is_padded_iso_date(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Status of every umbrella of the club for one date and slot, ordered by number.
///
/// Only an active booking for the exact slot label occupies an umbrella; a
/// "Full Day" booking does not block "08:00-12:00" and vice versa.
pub async fn check_availability(
    store: &dyn Store,
    club_id: Uuid,
    booking_date: NaiveDate,
    slot: &str,
) -> Result<Vec<UmbrellaAvailability>, AppError> {
    let umbrellas = catalog::service::list_map(store, club_id).await?;

    let occupied: HashSet<Uuid> = store
        .list_active_bookings(club_id, booking_date, slot)
        .await?
        .into_iter()
        .map(|b| b.umbrella_id)
        .collect();

    tracing::debug!(
        "Availability for {} / {}: {} of {} occupied",
        booking_date,
        slot,
        occupied.len(),
        umbrellas.len()
    );

    Ok(umbrellas
        .into_iter()
        .map(|u| UmbrellaAvailability {
            umbrella_id: u.id,
            number: u.number,
            status: if occupied.contains(&u.id) {
                AvailabilityStatus::Occupied
            } else {
                AvailabilityStatus::Available
            },
        })
        .collect())
}
