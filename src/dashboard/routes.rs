//! Dashboard route handlers.

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use super::{guard, render};
use crate::error::CourtsideError;
use crate::storage::CompetitionDatabase;

/// Application state shared across handlers.
pub struct AppState {
    pub db: CompetitionDatabase,
}

/// Error rendered back to the browser as an HTML page.
///
/// SQL failures are shown verbatim the way the original tool surfaced them;
/// the read-only guard keeps them coming only from SELECT-shaped statements.
pub struct PageError {
    status: StatusCode,
    message: String,
}

impl From<CourtsideError> for PageError {
    fn from(err: CourtsideError) -> Self {
        let status = match err {
            CourtsideError::UnknownTable { .. } | CourtsideError::ForbiddenStatement { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        (self.status, Html(render::error_page(&self.message))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryForm {
    pub sql: String,
}

/// Landing page: table list and the SQL form.
pub async fn index() -> Html<String> {
    Html(render::index())
}

/// Rows of the selected table, with its actual row count.
pub async fn view_table(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let data = state.db.table_rows(&name).await?;
    let count = state.db.table_count(&name).await?;

    let body = format!(
        "<p>Total records: {count}</p>{}",
        render::data_table(&data)
    );
    Ok(Html(render::page(&format!("Table: {name}"), &body)))
}

/// Column names and types of the selected table.
pub async fn view_schema(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Html<String>, PageError> {
    let columns = state.db.table_schema(&name).await?;

    Ok(Html(render::page(
        &format!("Schema: {name}"),
        &render::schema_table(&columns),
    )))
}

/// Execute the free-text SQL box, read-only statements only.
pub async fn run_query(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QueryForm>,
) -> Result<Html<String>, PageError> {
    if form.sql.trim().is_empty() {
        return Ok(Html(render::page(
            "Query result",
            "<p>Please enter a SQL query.</p>",
        )));
    }

    guard::ensure_read_only(&form.sql)?;
    let data = state.db.select_raw(&form.sql).await?;

    let body = format!("<p>{} rows</p>{}", data.len(), render::data_table(&data));
    Ok(Html(render::page("Query result", &body)))
}
