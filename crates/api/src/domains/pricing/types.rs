use serde::{Deserialize, Serialize};

use crate::domains::availability::types::default_slot;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuoteExtra {
    pub key: String,
    pub name: String,
    pub price_cents: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    pub base_cents: i64,
    pub extras: Vec<QuoteExtra>,
    pub total_cents: i64,
}

#[derive(Deserialize, Debug)]
pub struct QuoteRequest {
    /// Kept raw: an id that is missing or unparseable is reported as an unknown umbrella.
    #[serde(default)]
    pub umbrella_id: Option<String>,
    #[serde(default = "default_slot")]
    pub slot: String,
    #[serde(default)]
    pub services: Vec<String>,
}
