use sqlx::{PgExecutor, Postgres, QueryBuilder, Result as SqlxResult};
use uuid::Uuid;

use crate::models::{NewUmbrella, UmbrellaRow};

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: Uuid,
) -> SqlxResult<Option<UmbrellaRow>> {
    sqlx::query_as::<_, UmbrellaRow>(
        r#"
        SELECT id, club_id, number, row_index, x, y, sunbeds_included,
               base_price_slot_cents, base_price_day_cents, created_at
        FROM umbrellas
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn list_by_club<'e>(
    executor: impl PgExecutor<'e>,
    club_id: Uuid,
) -> SqlxResult<Vec<UmbrellaRow>> {
    sqlx::query_as::<_, UmbrellaRow>(
        r#"
        SELECT id, club_id, number, row_index, x, y, sunbeds_included,
               base_price_slot_cents, base_price_day_cents, created_at
        FROM umbrellas
        WHERE club_id = $1
        ORDER BY number ASC
        "#,
    )
    .bind(club_id)
    .fetch_all(executor)
    .await
}

/// Bulk insert in a single statement. Returns the rows ordered by number.
pub async fn create_many<'e>(
    executor: impl PgExecutor<'e>,
    data: Vec<NewUmbrella>,
) -> SqlxResult<Vec<UmbrellaRow>> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
        "INSERT INTO umbrellas (club_id, number, row_index, x, y, sunbeds_included, base_price_slot_cents, base_price_day_cents) ",
    );
    builder.push_values(data, |mut row, u| {
        row.push_bind(u.club_id)
            .push_bind(u.number)
            .push_bind(u.row_index)
            .push_bind(u.x)
            .push_bind(u.y)
            .push_bind(u.sunbeds_included)
            .push_bind(u.base_price_slot_cents)
            .push_bind(u.base_price_day_cents);
    });
    builder.push(
        " RETURNING id, club_id, number, row_index, x, y, sunbeds_included, base_price_slot_cents, base_price_day_cents, created_at",
    );

    let mut rows = builder
        .build_query_as::<UmbrellaRow>()
        .fetch_all(executor)
        .await?;
    rows.sort_by_key(|u| u.number);
    Ok(rows)
}
