use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{BookingRow, NewBooking};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Active bookings hold their umbrella for the booked date and slot.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// Cancelled is terminal. Nothing moves back to pending.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
        )
    }
}

const BOOKING_COLUMNS: &str = "id, club_id, umbrella_id, umbrella_number, booking_date, slot, guests, services, \
     customer_name, customer_email, total_amount_cents, status, created_at, updated_at";

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(&format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Active bookings of a club for one date and slot.
pub async fn list_active_for_slot<'e>(
    executor: impl PgExecutor<'e>,
    club_id: Uuid,
    booking_date: NaiveDate,
    slot: &str,
) -> SqlxResult<Vec<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        WHERE club_id = $1
          AND booking_date = $2
          AND slot = $3
          AND status IN ('pending', 'confirmed')
        ORDER BY umbrella_number ASC
        "#
    ))
    .bind(club_id)
    .bind(booking_date)
    .bind(slot)
    .fetch_all(executor)
    .await
}

pub async fn find_active<'e>(
    executor: impl PgExecutor<'e>,
    umbrella_id: Uuid,
    booking_date: NaiveDate,
    slot: &str,
) -> SqlxResult<Option<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        WHERE umbrella_id = $1
          AND booking_date = $2
          AND slot = $3
          AND status IN ('pending', 'confirmed')
        LIMIT 1
        "#
    ))
    .bind(umbrella_id)
    .bind(booking_date)
    .bind(slot)
    .fetch_optional(executor)
    .await
}

/// Inserts unless an active booking already holds (umbrella, date, slot).
///
/// Relies on the `bookings_active_slot_key` partial unique index, so two
/// concurrent callers cannot both succeed. Returns `None` for the loser.
pub async fn create_if_free<'e>(
    executor: impl PgExecutor<'e>,
    data: NewBooking,
) -> SqlxResult<Option<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(&format!(
        r#"
        INSERT INTO bookings (
            club_id, umbrella_id, umbrella_number, booking_date, slot, guests, services,
            customer_name, customer_email, total_amount_cents, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        ON CONFLICT (umbrella_id, booking_date, slot) WHERE status IN ('pending', 'confirmed')
        DO NOTHING
        RETURNING {BOOKING_COLUMNS}
        "#
    ))
    .bind(data.club_id)
    .bind(data.umbrella_id)
    .bind(data.umbrella_number)
    .bind(data.booking_date)
    .bind(data.slot)
    .bind(data.guests)
    .bind(data.services)
    .bind(data.customer_name)
    .bind(data.customer_email)
    .bind(data.total_amount_cents)
    .bind(data.status)
    .fetch_optional(executor)
    .await
}

/// Newest first, optionally restricted to one customer email.
pub async fn list<'e>(
    executor: impl PgExecutor<'e>,
    customer_email: Option<&str>,
) -> SqlxResult<Vec<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(&format!(
        r#"
        SELECT {BOOKING_COLUMNS}
        FROM bookings
        WHERE ($1::TEXT IS NULL OR customer_email = $1)
        ORDER BY created_at DESC, id ASC
        "#
    ))
    .bind(customer_email)
    .fetch_all(executor)
    .await
}

/// Compare-and-set on status. `None` when the booking is missing or no longer in `from`.
pub async fn update_status<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
    from: BookingStatus,
    to: BookingStatus,
) -> SqlxResult<Option<BookingRow>> {
    sqlx::query_as::<_, BookingRow>(&format!(
        r#"
        UPDATE bookings
        SET status = $3, updated_at = NOW()
        WHERE id = $1 AND status = $2
        RETURNING {BOOKING_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(from)
    .bind(to)
    .fetch_optional(executor)
    .await
}
