use reqwest::{redirect, Client, StatusCode};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::query::build_query;
use crate::record::{ApiError, GameRecord};

const USER_AGENT: &str = "Switchcord/1.0";

/// Client for the IGDB game catalog.
///
/// Holds nothing but the configuration and a reusable HTTP connection pool;
/// every call is a single synchronous request/response exchange with no
/// shared mutable state, so one client can serve any number of tasks.
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// Redirect responses are treated as final, never chased.
    pub fn new(config: CatalogConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self { http, config }
    }

    /// Search for Nintendo Switch games matching the search term.
    ///
    /// Returns at most 10 records, in the order the service ranked them.
    /// Either the full decoded list comes back or an error does, never both.
    pub async fn search(&self, term: &str) -> Result<Vec<GameRecord>> {
        let query = build_query(term);
        let data = self.execute(&query).await?;

        let games: Vec<GameRecord> =
            serde_json::from_slice(&data).map_err(CatalogError::MalformedResponse)?;
        tracing::debug!("catalog returned {} records for {:?}", games.len(), term);
        Ok(games)
    }

    /// Perform one POST of the query expression and return the raw response
    /// bytes. Exactly one network round trip, no retries.
    async fn execute(&self, query: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .header("user-agent", USER_AGENT)
            .header("accept", "application/json")
            .header("user-key", &self.config.api_key)
            .body(query.to_string())
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let code = response.status();
        if code != StatusCode::OK {
            return Err(classify_status(code, response).await);
        }

        let body = response.bytes().await.map_err(CatalogError::Io)?;
        Ok(body.to_vec())
    }
}

/// Classify a non-200 response. A body that reads and decodes as the
/// service's error object becomes the structured cause; any failure on this
/// path is dropped so the original HTTP status is what surfaces.
async fn classify_status(code: StatusCode, response: reqwest::Response) -> CatalogError {
    let status = status_line(code);
    let cause = match response.bytes().await {
        Ok(body) if !body.is_empty() => serde_json::from_slice::<ApiError>(&body).ok(),
        _ => None,
    };
    if cause.is_none() {
        tracing::warn!("catalog query failed: {}", status);
    }

    CatalogError::Query {
        code: code.as_u16(),
        status,
        cause,
    }
}

/// Status line in the `"404 Not Found"` form; bare code when the reason
/// phrase is unknown.
fn status_line(code: StatusCode) -> String {
    match code.canonical_reason() {
        Some(reason) => format!("{} {}", code.as_u16(), reason),
        None => code.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_known_code() {
        assert_eq!(status_line(StatusCode::NOT_FOUND), "404 Not Found");
        assert_eq!(status_line(StatusCode::BAD_REQUEST), "400 Bad Request");
    }

    #[test]
    fn test_status_line_unknown_code() {
        let code = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_line(code), "599");
    }
}
