use std::sync::Arc;

use anyhow::Context;
use infra::{MemoryStore, PgStore, Store};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::AppConfig;
use api::domains::catalog;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let store = PgStore::connect(url, config.database_max_connections)
                .await
                .context("failed to connect to Postgres")?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                config.database_max_connections
            );

            // Run database migrations automatically on startup (can be disabled with SKIP_MIGRATIONS=true)
            if config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                sqlx::migrate!("../../migrations").run(store.pool()).await?;
                tracing::info!("Database migrations completed successfully");
            }

            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, bookings are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    if config.skip_seed {
        tracing::info!("Skipping demo seed (SKIP_SEED=true)");
    } else {
        catalog::service::seed_if_empty(store.as_ref()).await?;
    }

    let club_id = catalog::service::resolve_club_id(store.as_ref(), config.club_id).await?;
    match club_id {
        Some(id) => tracing::info!("Serving beach club {}", id),
        None => tracing::warn!("No beach club found; catalog endpoints will return 404"),
    }

    let state = AppState::new(store, club_id);
    let app = build_router(state, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
