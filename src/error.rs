use thiserror::Error;

use crate::record::ApiError;

/// Main error type for the catalog client.
///
/// Every failure path gets its own variant so callers can branch on cause
/// (network down vs. the service rejecting the query vs. garbage payload)
/// instead of catching one opaque failure.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network failure before any HTTP response was obtained (connection
    /// refused, DNS failure, timeout).
    #[error("request error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success HTTP status. `cause` carries
    /// the service's structured error body when one was present and parsed.
    #[error("query failed: {status}")]
    Query {
        code: u16,
        status: String,
        cause: Option<ApiError>,
    },

    /// Failure while reading the body of a received response.
    #[error("io error: {0}")]
    Io(#[source] reqwest::Error),

    /// A 200 response whose body did not decode as a list of game records.
    #[error("json error: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;
