//! PostgreSQL persistence for the team-formation service.
//!
//! Exposes the shared connection pool, migrations, the row models and the
//! repositories, plus [`formation_store::PgFormationStore`], the database
//! implementation of the assignment engine's storage seam.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;

pub mod formation_store;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applied versus embedded migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
    pub applied: i64,
    pub expected: i64,
}

impl SchemaStatus {
    pub fn is_current(&self) -> bool {
        self.applied >= self.expected
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Run a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}

/// Compare the successful rows in `_sqlx_migrations` with the migrations
/// compiled into this build. Fails if the bookkeeping table does not exist.
pub async fn schema_status(pool: &DbPool) -> Result<SchemaStatus, sqlx::Error> {
    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
        .fetch_one(pool)
        .await?;
    let expected = MIGRATOR
        .iter()
        .filter(|m| m.migration_type.is_up_migration())
        .count() as i64;
    Ok(SchemaStatus { applied, expected })
}
