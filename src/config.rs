use std::time::Duration;

// Nintendo does not expose an official catalog API, so Switch titles are
// looked up through IGDB instead.
/// Production IGDB v3 games endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api-v3.igdb.com/games";

/// API key used to authenticate against the IGDB API.
pub const DEFAULT_API_KEY: &str = "6bbaebf0dad9ba341b35f204904551c7";

/// Absolute timeout covering connection and response, to prevent the caller
/// from hanging on a dead endpoint.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration for a [`CatalogClient`](crate::CatalogClient).
///
/// Kept as an explicit struct rather than module constants so tests can point
/// the client at a mock endpoint with a short timeout.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// URL the query expression is POSTed to.
    pub endpoint: String,
    /// Credential sent in the `user-key` header.
    pub api_key: String,
    /// Total time allowed for one request/response exchange.
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
