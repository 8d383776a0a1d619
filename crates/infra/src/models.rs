use crate::repos::bookings::BookingStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// How an add-on service is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Billing {
    PerSlot,
    PerDay,
}

/// Add-on service offered by a beach club. Stored embedded in the club row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraService {
    pub key: String,
    pub name: String,
    pub price_cents: i64,
    pub billing: Billing,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ClubRow {
    pub id: Uuid,
    pub name: String,
    pub hero_image: Option<String>,
    pub rating: f64,
    pub total_reviews: i32,
    pub currency: String,
    pub default_timeslots: Vec<String>,
    pub services: Json<Vec<ExtraService>>, // JSONB field
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClubRow {
    pub fn find_service(&self, key: &str) -> Option<&ExtraService> {
        self.services.0.iter().find(|s| s.key == key)
    }
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UmbrellaRow {
    pub id: Uuid,
    pub club_id: Uuid,
    pub number: i32,
    pub row_index: i32,
    pub x: f64,
    pub y: f64,
    pub sunbeds_included: i32,
    pub base_price_slot_cents: i64,
    pub base_price_day_cents: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct BookingRow {
    pub id: Uuid,
    pub club_id: Uuid,
    pub umbrella_id: Uuid,
    pub umbrella_number: i32,
    pub booking_date: NaiveDate,
    pub slot: String,
    pub guests: i32,
    pub services: Vec<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount_cents: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewClub {
    pub name: String,
    pub hero_image: Option<String>,
    pub rating: f64,
    pub total_reviews: i32,
    pub currency: String,
    pub default_timeslots: Vec<String>,
    pub services: Vec<ExtraService>,
}

#[derive(Debug, Clone)]
pub struct NewUmbrella {
    pub club_id: Uuid,
    pub number: i32,
    pub row_index: i32,
    pub x: f64,
    pub y: f64,
    pub sunbeds_included: i32,
    pub base_price_slot_cents: i64,
    pub base_price_day_cents: i64,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub club_id: Uuid,
    pub umbrella_id: Uuid,
    pub umbrella_number: i32,
    pub booking_date: NaiveDate,
    pub slot: String,
    pub guests: i32,
    pub services: Vec<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount_cents: i64,
    pub status: BookingStatus,
}
