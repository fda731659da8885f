//! CLI argument definitions and parsing.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "courtside", about = "Tennis competition data CLI")]
pub struct Courtside {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch competitions from the Sportradar API and load them into Postgres.
    ///
    /// Creates the `categories` and `competitions` tables if absent, then
    /// appends the fetched rows in one transaction.
    Extract {
        /// Print a sample of the transformed rows before inserting.
        #[clap(long)]
        verbose: bool,
    },

    /// Serve the table-browser dashboard.
    Dashboard {
        /// Address to bind.
        #[clap(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind.
        #[clap(long, default_value_t = 8080)]
        port: u16,
    },

    /// Run an ad hoc SQL query against the analytics database.
    ///
    /// Opens a fresh connection to `ANALYTICS_DATABASE_URL`, runs the query,
    /// and prints the result as a text table.
    Query {
        /// The SQL statement to execute.
        sql: String,
    },
}
