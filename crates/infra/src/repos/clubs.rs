use sqlx::types::Json;
use sqlx::{PgExecutor, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{ClubRow, NewClub};

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: Uuid) -> SqlxResult<Option<ClubRow>> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        SELECT id, name, hero_image, rating, total_reviews, currency,
               default_timeslots, services, created_at, updated_at
        FROM beach_clubs
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Oldest club, if any. Used to pick the deployment's club when none is configured.
pub async fn first_id<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Option<Uuid>> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id
        FROM beach_clubs
        ORDER BY created_at ASC, id ASC
        LIMIT 1
        "#,
    )
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: NewClub) -> SqlxResult<ClubRow> {
    sqlx::query_as::<_, ClubRow>(
        r#"
        INSERT INTO beach_clubs (name, hero_image, rating, total_reviews, currency, default_timeslots, services)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, hero_image, rating, total_reviews, currency,
                  default_timeslots, services, created_at, updated_at
        "#,
    )
    .bind(data.name)
    .bind(data.hero_image)
    .bind(data.rating)
    .bind(data.total_reviews)
    .bind(data.currency)
    .bind(data.default_timeslots)
    .bind(Json(data.services))
    .fetch_one(executor)
    .await
}
