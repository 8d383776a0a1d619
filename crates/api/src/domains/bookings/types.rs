use chrono::{DateTime, NaiveDate, Utc};
use infra::models::BookingRow;
use infra::repos::BookingStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::pricing::types::Quote;

pub const MIN_GUESTS: i32 = 1;
pub const MAX_GUESTS: i32 = 8;

fn default_guests() -> i32 {
    2
}

#[derive(Deserialize, Clone, Debug)]
pub struct BookingRequest {
    #[serde(default)]
    pub umbrella_id: Option<String>,
    pub umbrella_number: i32,
    pub booking_date: String,
    pub slot: String,
    #[serde(default = "default_guests")]
    pub guests: i32,
    #[serde(default)]
    pub services: Vec<String>,
    pub customer_name: String,
    pub customer_email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BookingConfirmation {
    pub booking_id: Uuid,
    pub status: BookingStatus,
    pub quote: Quote,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Booking {
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
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            club_id: row.club_id,
            umbrella_id: row.umbrella_id,
            umbrella_number: row.umbrella_number,
            booking_date: row.booking_date,
            slot: row.slot,
            guests: row.guests,
            services: row.services,
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            total_amount_cents: row.total_amount_cents,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct BookingListQuery {
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BookingListResponse {
    pub items: Vec<Booking>,
}
