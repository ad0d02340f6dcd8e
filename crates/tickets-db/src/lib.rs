//! # Tickets DB
//!
//! Connection pool setup, schema migrations and table maintenance for the
//! Tickets API, using SQLx with PostgreSQL.
//!
//! Services never hold a connection beyond a single operation: they pass the
//! pool (or a transaction begun from it) to one query and the connection goes
//! back to the pool when the guard drops, on success and error paths alike.
//!
//! # Example
//!
//! ```ignore
//! use tickets_config::DatabaseConfig;
//! use tickets_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! ```

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, instrument, warn};

use tickets_config::DatabaseConfig;

pub use sqlx::PgPool;

/// Embedded schema migrations from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Tables owned by the API, children first.
pub const TABLES: [&str; 4] = ["events", "customers", "partners", "users"];

/// Opens a PostgreSQL connection pool.
///
/// Idle connections are not kept warm: `min_connections` is zero, so an idle
/// server holds no connections open.
#[instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .min_connections(0)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await?;

    info!("Database pool ready");
    Ok(pool)
}

/// Applies any pending migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}

/// Empties every API table and restarts their id sequences.
///
/// Destructive: only reachable from the admin CLI.
pub async fn reset_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    warn!(tables = ?TABLES, "Truncating all tables");

    sqlx::query(&truncate_statement())
        .execute(pool)
        .await?;

    Ok(())
}

fn truncate_statement() -> String {
    format!("TRUNCATE TABLE {} RESTART IDENTITY CASCADE", TABLES.join(", "))
}
