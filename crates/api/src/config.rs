use anyhow::{Context, Result};
use std::env;
use uuid::Uuid;

/// Runtime settings, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Postgres connection string. Without it the service runs on the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub skip_migrations: bool,
    pub skip_seed: bool,
    /// Club every operation acts on. Defaults to the seeded (or sole existing) club.
    pub club_id: Option<Uuid>,
    pub port: u16,
    /// `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_max_connections: 30,
            skip_migrations: false,
            skip_seed: false,
            club_id: None,
            port: 8000,
            allowed_origins: vec!["*".to_string()],
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.trim().is_empty()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.database_max_connections),
            skip_migrations: flag("SKIP_MIGRATIONS"),
            skip_seed: flag("SKIP_SEED"),
            club_id: parse_var("CLUB_ID")?,
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or(defaults.allowed_origins),
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS")?
                .unwrap_or(defaults.request_timeout_secs),
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value: {raw}")),
        _ => Ok(None),
    }
}

fn flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false)
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect()
}
