//! Sportradar API client: payload types, the single fetch call, and the
//! flattening of the JSON payload into table rows.

pub mod http;
pub mod transform;
pub mod types;

#[cfg(test)]
mod tests;

pub use http::fetch_competitions;
pub use transform::transform;
pub use types::{CompetitionsResponse, RawCategory, RawCompetition};
