//! Persistence layer: connection pool, migrations, row models, repositories
//! and the program tree reconciler.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod reconcile;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections (default: `20`).
    pub max_connections: u32,
    /// How long a request may wait for a free connection before failing
    /// (default: `2`).
    pub acquire_timeout_secs: u64,
    /// Idle connections are closed after this many seconds (default: `30`).
    pub idle_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 20,
            acquire_timeout_secs: 2,
            idle_timeout_secs: 30,
        }
    }
}

impl PoolConfig {
    /// Load pool settings from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `DB_MAX_CONNECTIONS`      | `20`    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `2`     |
    /// | `DB_IDLE_TIMEOUT_SECS`    | `30`    |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(defaults.max_connections);

        let acquire_timeout_secs: u64 = std::env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .map(|v| v.parse().expect("DB_ACQUIRE_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.acquire_timeout_secs);

        let idle_timeout_secs: u64 = std::env::var("DB_IDLE_TIMEOUT_SECS")
            .map(|v| v.parse().expect("DB_IDLE_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.idle_timeout_secs);

        Self {
            max_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Resolve a transaction from the outcome of the work done inside it.
///
/// Commits on `Ok`, rolls back on `Err` and hands the original error back.
/// A failed rollback is logged and the original error still wins.
pub async fn settle_transaction<T, E>(
    tx: sqlx::Transaction<'_, sqlx::Postgres>,
    result: Result<T, E>,
) -> Result<T, E>
where
    E: From<sqlx::Error> + std::fmt::Display,
{
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, cause = %err, "Transaction rollback failed");
            } else {
                tracing::debug!(cause = %err, "Transaction rolled back");
            }
            Err(err)
        }
    }
}
