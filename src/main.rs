//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use courtside::{
    cli::{Commands, Courtside},
    commands::{extract::handle_extract, query::handle_query},
    dashboard, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let app = Courtside::parse();

    match app.command {
        Commands::Extract { verbose } => handle_extract(verbose).await?,
        Commands::Dashboard { host, port } => dashboard::serve(&host, port).await?,
        Commands::Query { sql } => handle_query(&sql).await?,
    }

    Ok(())
}
