use infra::models::{Billing, ClubRow, UmbrellaRow};
use infra::Store;
use uuid::Uuid;

use super::types::{Quote, QuoteExtra};
use crate::domains::catalog;
use crate::error::AppError;

/// The only slot label billed at the day rate. Any other label is a regular slot.
pub const FULL_DAY_SLOT: &str = "Full Day";

pub fn is_full_day(slot: &str) -> bool {
    slot == FULL_DAY_SLOT
}

/// Price an umbrella for a slot plus add-on services.
///
/// Unknown service keys are skipped. Per-slot services cost double on a full
/// day (a full day counts as two slots). Extras keep the order of `service_keys`.
pub fn compute_quote(
    club: &ClubRow,
    umbrella: &UmbrellaRow,
    slot: &str,
    service_keys: &[String],
) -> Quote {
    let full_day = is_full_day(slot);
    let base_cents = if full_day {
        umbrella.base_price_day_cents
    } else {
        umbrella.base_price_slot_cents
    };

    let extras: Vec<QuoteExtra> = service_keys
        .iter()
        .filter_map(|key| club.find_service(key))
        .map(|service| {
            let price_cents = match service.billing {
                Billing::PerSlot if full_day => service.price_cents * 2,
                _ => service.price_cents,
            };
            QuoteExtra {
                key: service.key.clone(),
                name: service.name.clone(),
                price_cents,
            }
        })
        .collect();

    let total_cents = base_cents + extras.iter().map(|e| e.price_cents).sum::<i64>();

    Quote {
        base_cents,
        extras,
        total_cents,
    }
}

/// Quote plus the resolved umbrella, for callers that need both.
pub async fn quote_with_umbrella(
    store: &dyn Store,
    club_id: Uuid,
    umbrella_id: Uuid,
    slot: &str,
    service_keys: &[String],
) -> Result<(UmbrellaRow, Quote), AppError> {
    let club = catalog::service::get_club(store, club_id).await?;
    let umbrella = catalog::service::get_umbrella(store, club.id, umbrella_id).await?;

    let quote = compute_quote(&club, &umbrella, slot, service_keys);
    tracing::debug!(
        "Quoted umbrella #{} for {}: {} cents",
        umbrella.number,
        slot,
        quote.total_cents
    );

    Ok((umbrella, quote))
}

pub async fn quote(
    store: &dyn Store,
    club_id: Uuid,
    umbrella_id: Uuid,
    slot: &str,
    service_keys: &[String],
) -> Result<Quote, AppError> {
    quote_with_umbrella(store, club_id, umbrella_id, slot, service_keys)
        .await
        .map(|(_, quote)| quote)
}
