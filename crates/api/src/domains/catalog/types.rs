use chrono::{DateTime, Utc};
use infra::models::{Billing, ClubRow, ExtraService, UmbrellaRow};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, Clone, Debug)]
pub struct Service {
    pub key: String,
    pub name: String,
    pub price_cents: i64,
    pub billing: Billing,
}

impl From<ExtraService> for Service {
    fn from(s: ExtraService) -> Self {
        Self {
            key: s.key,
            name: s.name,
            price_cents: s.price_cents,
            billing: s.billing,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct BeachClub {
    pub id: Uuid,
    pub name: String,
    pub hero_image: Option<String>,
    pub rating: f64,
    pub total_reviews: i32,
    pub currency: String,
    pub default_timeslots: Vec<String>,
    pub services: Vec<Service>,
    pub created_at: DateTime<Utc>,
}

impl From<ClubRow> for BeachClub {
    fn from(row: ClubRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            hero_image: row.hero_image,
            rating: row.rating,
            total_reviews: row.total_reviews,
            currency: row.currency,
            default_timeslots: row.default_timeslots,
            services: row.services.0.into_iter().map(Service::from).collect(),
            created_at: row.created_at,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct Umbrella {
    pub id: Uuid,
    pub club_id: Uuid,
    pub number: i32,
    pub row: i32,
    pub x: f64,
    pub y: f64,
    pub sunbeds_included: i32,
    pub base_price_slot_cents: i64,
    pub base_price_day_cents: i64,
}

impl From<UmbrellaRow> for Umbrella {
    fn from(row: UmbrellaRow) -> Self {
        Self {
            id: row.id,
            club_id: row.club_id,
            number: row.number,
            row: row.row_index,
            x: row.x,
            y: row.y,
            sunbeds_included: row.sunbeds_included,
            base_price_slot_cents: row.base_price_slot_cents,
            base_price_day_cents: row.base_price_day_cents,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct MapResponse {
    pub umbrellas: Vec<Umbrella>,
}
