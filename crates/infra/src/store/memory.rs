use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::RwLock;
use sqlx::types::Json;
use uuid::Uuid;

use super::{SeedOutcome, Store, StoreError, StoreResult};
use crate::models::{BookingRow, ClubRow, NewBooking, NewClub, NewUmbrella, UmbrellaRow};
use crate::repos::BookingStatus;
use crate::seed;

#[derive(Default)]
struct Tables {
    clubs: Vec<ClubRow>,
    umbrellas: Vec<UmbrellaRow>,
    bookings: Vec<BookingRow>,
}

/// Process-local store. Every write takes the single table lock, which is
/// what makes `insert_booking_if_free` and `seed_if_empty` atomic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
    offline: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates a lost backend: every call fails with [`StoreError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn club_count(&self) -> usize {
        self.tables.read().clubs.len()
    }

    pub fn umbrella_count(&self) -> usize {
        self.tables.read().umbrellas.len()
    }

    /// Inserts a club without touching umbrellas. Used for multi-club fixtures.
    pub fn insert_club(&self, data: NewClub) -> ClubRow {
        let row = club_row(data);
        self.tables.write().clubs.push(row.clone());
        row
    }

    pub fn insert_umbrellas(&self, data: Vec<NewUmbrella>) -> Vec<UmbrellaRow> {
        let rows: Vec<UmbrellaRow> = data.into_iter().map(umbrella_row).collect();
        self.tables.write().umbrellas.extend(rows.iter().cloned());
        rows
    }

    fn ensure_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

fn club_row(data: NewClub) -> ClubRow {
    let now = Utc::now();
    ClubRow {
        id: Uuid::new_v4(),
        name: data.name,
        hero_image: data.hero_image,
        rating: data.rating,
        total_reviews: data.total_reviews,
        currency: data.currency,
        default_timeslots: data.default_timeslots,
        services: Json(data.services),
        created_at: now,
        updated_at: now,
    }
}

fn umbrella_row(data: NewUmbrella) -> UmbrellaRow {
    UmbrellaRow {
        id: Uuid::new_v4(),
        club_id: data.club_id,
        number: data.number,
        row_index: data.row_index,
        x: data.x,
        y: data.y,
        sunbeds_included: data.sunbeds_included,
        base_price_slot_cents: data.base_price_slot_cents,
        base_price_day_cents: data.base_price_day_cents,
        created_at: Utc::now(),
    }
}

fn holds_slot(b: &BookingRow, umbrella_id: Uuid, booking_date: NaiveDate, slot: &str) -> bool {
    b.umbrella_id == umbrella_id
        && b.booking_date == booking_date
        && b.slot == slot
        && b.status.is_active()
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.ensure_online()
    }

    async fn find_club(&self, club_id: Uuid) -> StoreResult<Option<ClubRow>> {
        self.ensure_online()?;
        let tables = self.tables.read();
        Ok(tables.clubs.iter().find(|c| c.id == club_id).cloned())
    }

    async fn first_club_id(&self) -> StoreResult<Option<Uuid>> {
        self.ensure_online()?;
        Ok(self.tables.read().clubs.first().map(|c| c.id))
    }

    async fn list_umbrellas(&self, club_id: Uuid) -> StoreResult<Vec<UmbrellaRow>> {
        self.ensure_online()?;
        let mut umbrellas: Vec<UmbrellaRow> = self
            .tables
            .read()
            .umbrellas
            .iter()
            .filter(|u| u.club_id == club_id)
            .cloned()
            .collect();
        umbrellas.sort_by_key(|u| u.number);
        Ok(umbrellas)
    }

    async fn find_umbrella(&self, umbrella_id: Uuid) -> StoreResult<Option<UmbrellaRow>> {
        self.ensure_online()?;
        let tables = self.tables.read();
        Ok(tables.umbrellas.iter().find(|u| u.id == umbrella_id).cloned())
    }

    async fn list_active_bookings(
        &self,
        club_id: Uuid,
        booking_date: NaiveDate,
        slot: &str,
    ) -> StoreResult<Vec<BookingRow>> {
        self.ensure_online()?;
        let mut bookings: Vec<BookingRow> = self
            .tables
            .read()
            .bookings
            .iter()
            .filter(|b| {
                b.club_id == club_id
                    && b.booking_date == booking_date
                    && b.slot == slot
                    && b.status.is_active()
            })
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.umbrella_number);
        Ok(bookings)
    }

    async fn find_active_booking(
        &self,
        umbrella_id: Uuid,
        booking_date: NaiveDate,
        slot: &str,
    ) -> StoreResult<Option<BookingRow>> {
        self.ensure_online()?;
        let tables = self.tables.read();
        Ok(tables
            .bookings
            .iter()
            .find(|b| holds_slot(b, umbrella_id, booking_date, slot))
            .cloned())
    }

    async fn insert_booking_if_free(&self, booking: NewBooking) -> StoreResult<Option<BookingRow>> {
        self.ensure_online()?;
        let mut tables = self.tables.write();

        if booking.status.is_active()
            && tables.bookings.iter().any(|b| {
                holds_slot(b, booking.umbrella_id, booking.booking_date, &booking.slot)
            })
        {
            return Ok(None);
        }

        let now = Utc::now();
        let row = BookingRow {
            id: Uuid::new_v4(),
            club_id: booking.club_id,
            umbrella_id: booking.umbrella_id,
            umbrella_number: booking.umbrella_number,
            booking_date: booking.booking_date,
            slot: booking.slot,
            guests: booking.guests,
            services: booking.services,
            customer_name: booking.customer_name,
            customer_email: booking.customer_email,
            total_amount_cents: booking.total_amount_cents,
            status: booking.status,
            created_at: now,
            updated_at: now,
        };
        tables.bookings.push(row.clone());
        Ok(Some(row))
    }

    async fn find_booking(&self, booking_id: Uuid) -> StoreResult<Option<BookingRow>> {
        self.ensure_online()?;
        let tables = self.tables.read();
        Ok(tables.bookings.iter().find(|b| b.id == booking_id).cloned())
    }

    async fn list_bookings(&self, customer_email: Option<&str>) -> StoreResult<Vec<BookingRow>> {
        self.ensure_online()?;
        let tables = self.tables.read();
        Ok(tables
            .bookings
            .iter()
            .rev()
            .filter(|b| customer_email.map_or(true, |email| b.customer_email == email))
            .cloned()
            .collect())
    }

    async fn update_booking_status(
        &self,
        booking_id: Uuid,
        from: BookingStatus,
        to: BookingStatus,
    ) -> StoreResult<Option<BookingRow>> {
        self.ensure_online()?;
        let mut tables = self.tables.write();
        let Some(booking) = tables
            .bookings
            .iter_mut()
            .find(|b| b.id == booking_id && b.status == from)
        else {
            return Ok(None);
        };
        booking.status = to;
        booking.updated_at = Utc::now();
        Ok(Some(booking.clone()))
    }

    async fn seed_if_empty(&self) -> StoreResult<SeedOutcome> {
        self.ensure_online()?;
        let mut tables = self.tables.write();

        if let Some(club) = tables.clubs.first() {
            return Ok(SeedOutcome {
                club_id: club.id,
                created: false,
            });
        }

        let club = club_row(seed::demo_club());
        let club_id = club.id;
        tables.clubs.push(club);
        tables.umbrellas.extend(
            seed::demo_umbrellas(club_id)
                .into_iter()
                .map(umbrella_row),
        );

        Ok(SeedOutcome {
            club_id,
            created: true,
        })
    }
}
