//! Inserts, table browsing, and raw query execution

use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

use super::models::{Category, ColumnInfo, Competition, TableData};
use super::schema::CompetitionDatabase;
use crate::error::{CourtsideError, Result};

/// The fixed set of table names the dashboard lets a user browse.
pub const DASHBOARD_TABLES: &[&str] = &[
    "categories",
    "competitions",
    "competitor_rankings",
    "competitors",
    "complexes",
    "venues",
];

/// Whether `name` is one of the browsable tables.
///
/// Table names are interpolated into SQL, so anything outside the fixed list
/// is rejected before it gets near a query string.
pub fn is_known_table(name: &str) -> bool {
    DASHBOARD_TABLES.contains(&name)
}

fn require_known_table(name: &str) -> Result<()> {
    if is_known_table(name) {
        Ok(())
    } else {
        Err(CourtsideError::UnknownTable {
            name: name.to_string(),
        })
    }
}

impl CompetitionDatabase {
    /// Append the transformed rows inside one transaction.
    ///
    /// Categories go first so the competitions foreign key is satisfiable;
    /// a category already present from an earlier run is left untouched.
    /// Returns `false` without touching the database when there are no
    /// competition rows to insert.
    pub async fn insert_competitions(
        &self,
        categories: &[Category],
        competitions: &[Competition],
    ) -> Result<bool> {
        if competitions.is_empty() {
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;

        for category in categories {
            sqlx::query(
                "INSERT INTO categories (category_id, category_name)
                 VALUES ($1, $2)
                 ON CONFLICT (category_id) DO NOTHING",
            )
            .bind(&category.category_id)
            .bind(&category.category_name)
            .execute(&mut *tx)
            .await?;
        }

        for competition in competitions {
            sqlx::query(
                "INSERT INTO competitions
                 (competition_id, competition_name, parent_id, type, gender, category_id)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(&competition.competition_id)
            .bind(&competition.competition_name)
            .bind(&competition.parent_id)
            .bind(&competition.kind)
            .bind(&competition.gender)
            .bind(&competition.category_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(true)
    }

    /// All rows of one of the browsable tables.
    pub async fn table_rows(&self, table: &str) -> Result<TableData> {
        require_known_table(table)?;

        let rows = sqlx::query(&format!("SELECT * FROM {table}"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows_to_table(&rows))
    }

    /// Row count of one of the browsable tables.
    pub async fn table_count(&self, table: &str) -> Result<i64> {
        require_known_table(table)?;

        let count = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Column names and types from information_schema.
    pub async fn table_schema(&self, table: &str) -> Result<Vec<ColumnInfo>> {
        require_known_table(table)?;

        let columns = sqlx::query_as::<_, (String, String)>(
            "SELECT column_name, data_type
             FROM information_schema.columns
             WHERE table_name = $1
             ORDER BY ordinal_position",
        )
        .bind(table)
        .fetch_all(&self.pool)
        .await?;

        Ok(columns
            .into_iter()
            .map(|(column_name, data_type)| ColumnInfo {
                column_name,
                data_type,
            })
            .collect())
    }

    /// Execute an arbitrary statement and stringify the result.
    ///
    /// Runs inside a transaction marked READ ONLY so Postgres rejects writes
    /// server-side even if one slips past the dashboard's keyword guard. The
    /// transaction is rolled back either way; nothing here commits.
    pub async fn select_raw(&self, sql: &str) -> Result<TableData> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;
        let rows = sqlx::query(sql).fetch_all(&mut *tx).await?;
        tx.rollback().await?;

        Ok(rows_to_table(&rows))
    }
}

/// Convert fetched rows into a stringified [`TableData`].
pub fn rows_to_table(rows: &[PgRow]) -> TableData {
    let columns = match rows.first() {
        Some(row) => row
            .columns()
            .iter()
            .map(|col| col.name().to_string())
            .collect(),
        None => Vec::new(),
    };

    let rendered = rows
        .iter()
        .map(|row| (0..row.len()).map(|i| cell_to_string(row, i)).collect())
        .collect();

    TableData {
        columns,
        rows: rendered,
    }
}

/// Stringify one cell, decoding by the column's reported Postgres type.
///
/// NULL renders as empty; types outside the schema's vocabulary fall back to
/// a placeholder naming the type rather than failing the whole result.
fn cell_to_string(row: &PgRow, index: usize) -> String {
    if let Ok(raw) = row.try_get_raw(index) {
        if raw.is_null() {
            return String::new();
        }
    }

    let type_name = row.columns()[index].type_info().name().to_string();
    match type_name.as_str() {
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => row
            .try_get::<String, _>(index)
            .unwrap_or_default(),
        "INT2" => row
            .try_get::<i16, _>(index)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        "INT4" => row
            .try_get::<i32, _>(index)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        "INT8" => row
            .try_get::<i64, _>(index)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        "FLOAT4" => row
            .try_get::<f32, _>(index)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        "FLOAT8" => row
            .try_get::<f64, _>(index)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        "BOOL" => row
            .try_get::<bool, _>(index)
            .map(|v| v.to_string())
            .unwrap_or_default(),
        other => format!("<{}>", other.to_lowercase()),
    }
}
