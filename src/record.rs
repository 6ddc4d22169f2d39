use serde::{Deserialize, Serialize};

/// A game entry as returned by the IGDB API.
///
/// Every field falls back to its zero value when absent from the payload, and
/// unknown fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Catalog-wide unique identifier.
    #[serde(default)]
    pub id: i64,

    /// Identifier of the cover art asset.
    #[serde(default)]
    pub cover: i64,

    /// Platform identifiers, in the order the service returned them.
    #[serde(default)]
    pub platforms: Vec<i64>,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// URL-safe short identifier derived from the name.
    #[serde(default)]
    pub slug: String,
}

/// Best-effort shape of the error object IGDB returns alongside non-success
/// statuses. The schema is owned by the service; anything that does not
/// decode into this is treated as no structured cause at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub message: String,
}
