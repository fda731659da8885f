use reqwest::Client;
use std::time::Duration;

use crate::error::Result;
use crate::sportradar::types::{CompetitionsResponse, RawCompetition};

/// Sportradar tennis competitions endpoint.
pub const COMPETITIONS_URL: &str =
    "https://api.sportradar.com/tennis/trial/v3/en/competitions.json";

/// Timeout for the single fetch; there is no retry behind it.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Issue one GET against the competitions endpoint.
///
/// The API key travels as the `api_key` query parameter, which is how the
/// trial tier authenticates. Non-2xx statuses become errors; the caller
/// decides whether to treat a failure as an empty result set.
pub async fn fetch_competitions(api_key: &str) -> Result<Vec<RawCompetition>> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;

    let res = client
        .get(COMPETITIONS_URL)
        .query(&[("api_key", api_key)])
        .send()
        .await?
        .error_for_status()?
        .json::<CompetitionsResponse>()
        .await?;

    Ok(res.competitions)
}
