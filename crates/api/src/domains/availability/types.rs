use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::pricing::service::FULL_DAY_SLOT;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Available,
    Occupied,
}

#[derive(Serialize, Clone, Debug)]
pub struct UmbrellaAvailability {
    pub umbrella_id: Uuid,
    pub number: i32,
    pub status: AvailabilityStatus,
}

#[derive(Deserialize, Debug)]
pub struct AvailabilityQuery {
    #[serde(alias = "booking_date")]
    pub date: String,
    #[serde(default = "default_slot")]
    pub slot: String,
}

pub(crate) fn default_slot() -> String {
    FULL_DAY_SLOT.to_string()
}

#[derive(Serialize, Debug)]
pub struct AvailabilityResponse {
    pub date: String,
    pub slot: String,
    pub availability: Vec<UmbrellaAvailability>,
}
