//! Browser-based table explorer.
//!
//! Serves a fixed list of browsable tables with row/schema views and a
//! read-only SQL box. The connection pool is created once at startup and
//! shared across handlers; a failed connection aborts the server before it
//! listens.

pub mod guard;
pub mod render;
pub mod routes;

#[cfg(test)]
mod tests;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::storage::CompetitionDatabase;
use routes::AppState;

/// Run the dashboard server.
pub async fn serve(host: &str, port: u16) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "courtside=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DatabaseConfig::from_env()?;
    let db = CompetitionDatabase::connect(&config).await?;
    tracing::info!("Connected to database '{}'", config.dbname);

    let state = Arc::new(AppState { db });

    let app = Router::new()
        .route("/", get(routes::index))
        .route("/tables/:name", get(routes::view_table))
        .route("/tables/:name/schema", get(routes::view_schema))
        .route("/query", post(routes::run_query))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::new(host.parse()?, port);
    tracing::info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
