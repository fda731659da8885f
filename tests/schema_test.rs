//! Integration tests for schema initialization
//!
//! These need a live Postgres with the DB_* environment variables set (a
//! disposable database is fine; the tables are created if absent):
//!
//! ```bash
//! cargo test -- --ignored
//! ```

use courtside::{CompetitionDatabase, DatabaseConfig};

#[tokio::test]
#[ignore = "requires a live Postgres configured via DB_* env vars"]
async fn test_ensure_schema_twice_is_idempotent() {
    let config = DatabaseConfig::from_env().unwrap();
    let db = CompetitionDatabase::connect(&config).await.unwrap();

    db.ensure_schema().await.unwrap();
    db.ensure_schema().await.unwrap();

    // Exactly one of each table after the double initialization.
    let tables = db
        .select_raw(
            "SELECT table_name FROM information_schema.tables
             WHERE table_schema = 'public'
               AND table_name IN ('categories', 'competitions')
             ORDER BY table_name",
        )
        .await
        .unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables.rows[0][0], "categories");
    assert_eq!(tables.rows[1][0], "competitions");

    // Both tables answer schema introspection with their full column lists.
    let categories = db.table_schema("categories").await.unwrap();
    assert_eq!(categories.len(), 2);

    let competitions = db.table_schema("competitions").await.unwrap();
    assert_eq!(competitions.len(), 6);
}
