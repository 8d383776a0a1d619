use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::{SeedOutcome, Store, StoreResult};
use crate::models::{BookingRow, ClubRow, NewBooking, UmbrellaRow};
use crate::repos::{bookings, clubs, umbrellas, BookingStatus};
use crate::seed;

/// Key for `pg_advisory_xact_lock`, serializing seeders across processes.
const SEED_LOCK_KEY: i64 = 0x0b1a_5eed;

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Some(Duration::from_secs(600))) // 10 minutes
            .max_lifetime(Some(Duration::from_secs(1800))) // 30 minutes
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    async fn find_club(&self, club_id: Uuid) -> StoreResult<Option<ClubRow>> {
        Ok(clubs::get_by_id(&self.pool, club_id).await?)
    }

    async fn first_club_id(&self) -> StoreResult<Option<Uuid>> {
        Ok(clubs::first_id(&self.pool).await?)
    }

    async fn list_umbrellas(&self, club_id: Uuid) -> StoreResult<Vec<UmbrellaRow>> {
        Ok(umbrellas::list_by_club(&self.pool, club_id).await?)
    }

    async fn find_umbrella(&self, umbrella_id: Uuid) -> StoreResult<Option<UmbrellaRow>> {
        Ok(umbrellas::get_by_id(&self.pool, umbrella_id).await?)
    }

    async fn list_active_bookings(
        &self,
        club_id: Uuid,
        booking_date: NaiveDate,
        slot: &str,
    ) -> StoreResult<Vec<BookingRow>> {
        Ok(bookings::list_active_for_slot(&self.pool, club_id, booking_date, slot).await?)
    }

    async fn find_active_booking(
        &self,
        umbrella_id: Uuid,
        booking_date: NaiveDate,
        slot: &str,
    ) -> StoreResult<Option<BookingRow>> {
        Ok(bookings::find_active(&self.pool, umbrella_id, booking_date, slot).await?)
    }

    async fn insert_booking_if_free(&self, booking: NewBooking) -> StoreResult<Option<BookingRow>> {
        Ok(bookings::create_if_free(&self.pool, booking).await?)
    }

    async fn find_booking(&self, booking_id: Uuid) -> StoreResult<Option<BookingRow>> {
        Ok(bookings::get_by_id(&self.pool, booking_id).await?)
    }

    async fn list_bookings(&self, customer_email: Option<&str>) -> StoreResult<Vec<BookingRow>> {
        Ok(bookings::list(&self.pool, customer_email).await?)
    }

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> StoreResult<Option<BookingRow>> {
        Ok(bookings::update_status(&self.pool, booking_id, from, to).await?)
    }

    async fn seed_if_empty(&self) -> StoreResult<SeedOutcome> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        if let Some(club_id) = clubs::first_id(&mut *tx).await? {
            tx.commit().await?;
            return Ok(SeedOutcome {
                club_id,
                created: false,
            });
        }

        let club = clubs::create(&mut *tx, seed::demo_club()).await?;
        let created = umbrellas::create_many(&mut *tx, seed::demo_umbrellas(club.id)).await?;
        tx.commit().await?;

        tracing::debug!(
            "Seed transaction committed: club {} with {} umbrellas",
            club.id,
            created.len()
        );

        Ok(SeedOutcome {
            club_id: club.id,
            created: true,
        })
    }
}
