//! Courtside - Tennis Competition Data CLI
//!
//! Fetches tennis competition data from the Sportradar API, loads it into a
//! Postgres database, and serves a small web dashboard for browsing the
//! resulting tables.
//!
//! ## Components
//!
//! - **Extractor** (`courtside extract`): one-shot fetch / transform / load of
//!   the competitions feed into the `categories` and `competitions` tables.
//! - **Dashboard** (`courtside dashboard`): a browser-based table explorer
//!   with schema inspection and a read-only SQL box.
//! - **Query helper** (`courtside query`): ad hoc queries against a separate
//!   analytics database.
//!
//! ## Environment Configuration
//!
//! All credentials come from the environment (`.env` is honored):
//! ```bash
//! export DB_HOST=localhost
//! export DB_PORT=5432
//! export DB_USER=postgres
//! export DB_PASSWORD=...
//! export DB_NAME=sports_data
//! export SPORTRADAR_API_KEY=...
//! export ANALYTICS_DATABASE_URL=postgres://...
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod sportradar;
pub mod storage;

// Re-export commonly used types
pub use config::DatabaseConfig;
pub use error::{CourtsideError, Result};
pub use storage::{CompetitionDatabase, TableData};
