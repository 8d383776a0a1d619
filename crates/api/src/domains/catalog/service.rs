use infra::models::{ClubRow, UmbrellaRow};
use infra::{SeedOutcome, Store};
use uuid::Uuid;

use crate::error::AppError;

/// Populate the demo club and umbrella grid unless a club already exists.
pub async fn seed_if_empty(store: &dyn Store) -> Result<SeedOutcome, AppError> {
    let outcome = store.seed_if_empty().await?;
    if outcome.created {
        tracing::info!("Seeded demo beach club {}", outcome.club_id);
    } else {
        tracing::debug!("Catalog already populated, club {}", outcome.club_id);
    }
    Ok(outcome)
}

/// Pick the club the deployment serves: the configured one, else the sole existing one.
pub async fn resolve_club_id(
    store: &dyn Store,
    configured: Option<Uuid>,
) -> Result<Option<Uuid>, AppError> {
    match configured {
        Some(id) => Ok(Some(id)),
        None => Ok(store.first_club_id().await?),
    }
}

pub async fn get_club(store: &dyn Store, club_id: Uuid) -> Result<ClubRow, AppError> {
    store
        .find_club(club_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Club not found".to_string()))
}

/// Umbrellas of the club ordered by number.
pub async fn list_map(store: &dyn Store, club_id: Uuid) -> Result<Vec<UmbrellaRow>, AppError> {
    let club = get_club(store, club_id).await?;
    Ok(store.list_umbrellas(club.id).await?)
}

/// Umbrella ids arrive as raw strings; one that is absent or malformed names no umbrella.
pub fn parse_umbrella_id(raw: Option<&str>) -> Result<Uuid, AppError> {
    raw.and_then(|id| Uuid::parse_str(id.trim()).ok())
        .ok_or_else(|| AppError::NotFound("Umbrella not found".to_string()))
}

/// Resolve an umbrella of this club. Umbrellas of other clubs are reported as missing.
pub async fn get_umbrella(
    store: &dyn Store,
    club_id: Uuid,
    umbrella_id: Uuid,
) -> Result<UmbrellaRow, AppError> {
    store
        .find_umbrella(umbrella_id)
        .await?
        .filter(|u| u.club_id == club_id)
        .ok_or_else(|| AppError::NotFound("Umbrella not found".to_string()))
}
