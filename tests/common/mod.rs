#![allow(dead_code)]

use catalog_admin_api::{db::run_migrations, state::AppState};
use sea_orm::{ConnectOptions, Database};
use uuid::Uuid;

/// Runs against `TEST_DATABASE_URL` when set, otherwise a private in-memory
/// SQLite database. Tests use unique names so a shared database is safe.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".into());
    let mut options = ConnectOptions::new(url);
    // One connection: every in-memory SQLite connection is its own database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(orm))
}

/// `base` plus a random suffix.
pub fn unique(base: &str) -> String {
    format!("{base}-{}", &Uuid::new_v4().simple().to_string()[..8])
}
