//! Database connection and schema management

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::error::Result;

/// Pooled connection to the primary competitions database.
///
/// Built once per process; the dashboard shares one instance across all
/// request handlers.
pub struct CompetitionDatabase {
    pub(crate) pool: PgPool,
}

impl CompetitionDatabase {
    /// Open a pool against the configured database and verify liveness with
    /// a trivial query.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.url())
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Create the two tables if absent. Safe to call every run.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS categories (
                category_id VARCHAR(50) PRIMARY KEY,
                category_name VARCHAR(100) NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS competitions (
                competition_id VARCHAR(50) PRIMARY KEY,
                competition_name VARCHAR(100) NOT NULL,
                parent_id VARCHAR(50),
                type VARCHAR(20) NOT NULL,
                gender VARCHAR(10) NOT NULL,
                category_id VARCHAR(50),
                FOREIGN KEY (category_id) REFERENCES categories(category_id)
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
