//! Stats API client.
//!
//! One declarative endpoint: `GET {base_url}/` with `q`, `year`, and `format`
//! query parameters, answering a structured teams payload. No retries, no
//! caching — callers decide how to react, usually by consulting the
//! connectivity facade for a user-facing message.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::StatsConfig;

/// Query parameters for the teams endpoint, carrying the service's defaults.
#[derive(Debug, Clone, Serialize)]
pub struct TeamsQuery {
    pub q: String,
    pub year: u16,
    pub format: String,
}

impl Default for TeamsQuery {
    fn default() -> Self {
        Self {
            q: "teams".to_string(),
            year: 2024,
            format: "json".to_string(),
        }
    }
}

/// One team row from the stats service. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// Response shape of the teams endpoint.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Errors surfaced by the stats client.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Transport-level failure: DNS, TLS, timeout, or a malformed body.
    #[error("stats request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("stats service returned HTTP {code}")]
    Status { code: u16 },
}

/// Thin typed client over the stats HTTP service.
#[derive(Clone)]
pub struct StatsClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(config: &StatsConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the team list: `GET {base_url}/?q=…&year=…&format=…`.
    pub async fn fetch_teams(&self, query: &TeamsQuery) -> Result<TeamsResponse, StatsError> {
        let url = format!("{}/", self.base_url);
        debug!(url = %url, q = %query.q, year = query.year, "fetching teams");
        let resp = self.http.get(&url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StatsError::Status {
                code: status.as_u16(),
            });
        }
        Ok(resp.json::<TeamsResponse>().await?)
    }
}
