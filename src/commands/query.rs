//! Query command: run one ad hoc statement against the analytics database.

use sqlx::{Connection, PgConnection};

use crate::config::analytics_url_from_env;
use crate::error::Result;
use crate::storage::rows_to_table;

/// Handle the query command.
///
/// Opens a fresh connection to the analytics target (a different database
/// from the one the extractor loads), runs the supplied statement, prints the
/// result, and closes the connection.
pub async fn handle_query(sql: &str) -> Result<()> {
    let url = analytics_url_from_env()?;

    let mut conn = PgConnection::connect(&url).await?;
    let rows = sqlx::query(sql).fetch_all(&mut conn).await?;
    conn.close().await?;

    let table = rows_to_table(&rows);
    if table.is_empty() {
        println!("(0 rows)");
    } else {
        print!("{table}");
        println!("({} rows)", table.len());
    }

    Ok(())
}
