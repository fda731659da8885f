//! Error types for the courtside CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourtsideError>;

#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{var} environment variable not set")]
    MissingEnv { var: &'static str },

    #[error("DB_PORT is not a valid port number: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),

    #[error("invalid listen address: {0}")]
    InvalidAddress(#[from] std::net::AddrParseError),

    #[error("unknown table: {name}")]
    UnknownTable { name: String },

    #[error("only read-only statements are allowed: {reason}")]
    ForbiddenStatement { reason: String },
}
