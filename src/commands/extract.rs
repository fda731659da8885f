//! Extract command: fetch competitions from Sportradar and load them into
//! Postgres.

use crate::config::{api_key_from_env, DatabaseConfig};
use crate::error::Result;
use crate::sportradar::{fetch_competitions, transform};
use crate::storage::CompetitionDatabase;

/// Handle the extract command.
///
/// Runs connect -> ensure_schema -> fetch -> transform -> insert. Exits the
/// process with status 1 when the connection fails or the API yields nothing
/// usable; an insert failure is reported but does not change the exit code.
pub async fn handle_extract(verbose: bool) -> Result<()> {
    let config = DatabaseConfig::from_env()?;
    let api_key = api_key_from_env()?;

    println!("Attempting to connect to database...");
    let db = match CompetitionDatabase::connect(&config).await {
        Ok(db) => {
            println!("Database connection successful!");
            db
        }
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            eprintln!();
            eprintln!("Troubleshooting tips:");
            eprintln!("1. Verify PostgreSQL is running");
            eprintln!("2. Check your credentials in .env file");
            eprintln!("3. Ensure database '{}' exists", config.dbname);
            eprintln!("4. Verify your PostgreSQL port (default is 5432)");
            std::process::exit(1);
        }
    };

    println!("Initializing database tables...");
    db.ensure_schema().await?;

    println!("Fetching data from Sportradar API...");
    let raw = match fetch_competitions(&api_key).await {
        Ok(competitions) => competitions,
        Err(e) => {
            eprintln!("API request failed: {e}");
            Vec::new()
        }
    };

    if raw.is_empty() {
        println!("No data received from API");
        std::process::exit(1);
    }

    let (competitions, categories) = transform(raw);

    if verbose {
        println!("\nSample of transformed data:");
        for competition in competitions.iter().take(5) {
            println!(
                "  {} | {} | {} | {}",
                competition.competition_id,
                competition.competition_name,
                competition.kind,
                competition.gender
            );
        }
    }

    match db.insert_competitions(&categories, &competitions).await {
        Ok(true) => {
            println!(
                "Successfully inserted {} rows into competitions",
                competitions.len()
            );
            println!("\nData successfully loaded into database!");
        }
        Ok(false) => println!("No data to insert"),
        Err(e) => {
            eprintln!("Error inserting into competitions: {e}");
            eprintln!("\nFailed to load data into database");
        }
    }

    Ok(())
}
