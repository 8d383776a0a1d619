//! Persistence seam used by the booking engines.
//!
//! [`PgStore`] is the production backend; [`MemoryStore`] backs demo mode
//! (no `DATABASE_URL`) and the test suite. Both uphold the same invariant:
//! at most one active booking per (umbrella, date, slot).

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{BookingRow, ClubRow, NewBooking, UmbrellaRow};
use crate::repos::BookingStatus;

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached (pool exhausted, connection refused, closed).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("database error")]
    Database(sqlx::Error),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => StoreError::Unavailable(e.to_string()),
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                StoreError::Corrupt(e.to_string())
            }
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Result of [`Store::seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub club_id: Uuid,
    /// `false` when a club already existed and nothing was written.
    pub created: bool,
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Cheap round-trip proving the backend is reachable.
    async fn ping(&self) -> StoreResult<()>;

    async fn find_club(&self, club_id: Uuid) -> StoreResult<Option<ClubRow>>;

    async fn first_club_id(&self) -> StoreResult<Option<Uuid>>;

    async fn list_umbrellas(&self, club_id: Uuid) -> StoreResult<Vec<UmbrellaRow>>;

    async fn find_umbrella(&self, umbrella_id: Uuid) -> StoreResult<Option<UmbrellaRow>>;

    /// Pending or confirmed bookings of a club for one date and slot.
    async fn list_active_bookings(
        &self,
        club_id: Uuid,
        booking_date: NaiveDate,
        slot: &str,
    ) -> StoreResult<Vec<BookingRow>>;

    async fn find_active_booking(
        &self,
        umbrella_id: Uuid,
        booking_date: NaiveDate,
        slot: &str,
    ) -> StoreResult<Option<BookingRow>>;

    /// Atomic check-and-insert. `None` means another active booking holds the key.
    async fn insert_booking_if_free(&self, booking: NewBooking) -> StoreResult<Option<BookingRow>>;

    async fn find_booking(&self, booking_id: Uuid) -> StoreResult<Option<BookingRow>>;

    async fn list_bookings(&self, customer_email: Option<&str>) -> StoreResult<Vec<BookingRow>>;

    /// Compare-and-set. `None` when the booking is missing or its status is no longer `from`.
    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> StoreResult<Option<BookingRow>>;

    /// Writes the demo club and umbrella grid unless any club exists.
    /// Concurrent callers are serialized; exactly one of them creates data.
    async fn seed_if_empty(&self) -> StoreResult<SeedOutcome>;
}
