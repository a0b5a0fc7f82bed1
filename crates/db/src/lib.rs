//! Persistence for layouts and their version history.
//!
//! - [`models`] / [`repositories`]: sqlx row types and PostgreSQL queries.
//! - [`store`]: the [`store::LayoutStore`] trait handlers talk to, with a
//!   PostgreSQL and an in-memory implementation.
//! - [`history`]: snapshot-before-mutate orchestration and pruning.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod history;
pub mod models;
pub mod repositories;
pub mod store;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Run a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
