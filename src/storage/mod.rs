//! Storage layer for the courtside CLI
//!
//! A thin abstraction over the Postgres database, organized into:
//! - `models`: row types and the generic tabular result
//! - `schema`: connection and idempotent table creation
//! - `queries`: inserts, table browsing, and raw read-only execution

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::{Category, ColumnInfo, Competition, TableData};
pub use queries::{is_known_table, rows_to_table, DASHBOARD_TABLES};
pub use schema::CompetitionDatabase;
