//! Demo fixture for a freshly provisioned deployment: one club and a
//! 4 x 8 grid of umbrellas. Demo data and tests depend on these exact numbers.

use uuid::Uuid;

use crate::models::{Billing, ExtraService, NewClub, NewUmbrella};

pub const GRID_ROWS: i32 = 4;
pub const GRID_COLUMNS: i32 = 8;
pub const SUNBEDS_PER_UMBRELLA: i32 = 2;

pub fn default_timeslots() -> Vec<String> {
    ["08:00-12:00", "12:00-16:00", "16:00-20:00", "Full Day"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn demo_club() -> NewClub {
    NewClub {
        name: "Lido Mare Blu".to_string(),
        hero_image: Some(
            "https://images.unsplash.com/photo-1500375592092-40eb2168fd21?q=80&w=1600&auto=format&fit=crop"
                .to_string(),
        ),
        rating: 4.7,
        total_reviews: 324,
        currency: "EUR".to_string(),
        default_timeslots: default_timeslots(),
        services: vec![
            ExtraService {
                key: "towel".to_string(),
                name: "Beach Towel".to_string(),
                price_cents: 300,
                billing: Billing::PerDay,
            },
            ExtraService {
                key: "drinks".to_string(),
                name: "Welcome Drink".to_string(),
                price_cents: 500,
                billing: Billing::PerSlot,
            },
            ExtraService {
                key: "cabin".to_string(),
                name: "Private Cabin".to_string(),
                price_cents: 1200,
                billing: Billing::PerDay,
            },
        ],
    }
}

/// Row-major grid numbered from 1. Coordinates are normalized with a margin
/// on every side (x = column / 9, y = row / 6).
pub fn demo_umbrellas(club_id: Uuid) -> Vec<NewUmbrella> {
    let mut umbrellas = Vec::with_capacity((GRID_ROWS * GRID_COLUMNS) as usize);
    let mut number = 1;
    for row in 1..=GRID_ROWS {
        for column in 1..=GRID_COLUMNS {
            umbrellas.push(NewUmbrella {
                club_id,
                number,
                row_index: row,
                x: f64::from(column) / 9.0,
                y: f64::from(row) / 6.0,
                sunbeds_included: SUNBEDS_PER_UMBRELLA,
                base_price_slot_cents: i64::from(15 + row * 2) * 100,
                base_price_day_cents: i64::from(45 + row * 5) * 100,
            });
            number += 1;
        }
    }
    umbrellas
}
