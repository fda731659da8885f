//! Payload types for the Sportradar competitions endpoint.

use serde::Deserialize;

/// Top-level envelope for the competitions feed.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionsResponse {
    #[serde(default)]
    pub competitions: Vec<RawCompetition>,
}

/// One competition object as the API returns it.
///
/// `type` and `gender` are frequently absent; the transform step substitutes
/// defaults for them. `category` is a nested lookup object.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCompetition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// `type` is a Rust keyword; stored as `kind`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub category: Option<RawCategory>,
}

/// Nested category object carried on each competition.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub name: String,
}
