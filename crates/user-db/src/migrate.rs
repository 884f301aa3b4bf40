//! Schema migration
//!
//! The schema is embedded in the binary and every statement is idempotent, so
//! running it on each startup is safe.

use sqlx::PgPool;
use tracing::{info, instrument};

/// Ordered list of (name, SQL) migrations
pub const MIGRATIONS: &[(&str, &str)] = &[(
    "0001_create_users",
    include_str!("../migrations/0001_create_users.sql"),
)];

/// Apply every embedded migration
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for &(name, sql) in MIGRATIONS {
        sqlx::raw_sql(sql).execute(pool).await?;
        info!(migration = name, "Migration applied");
    }
    Ok(())
}
