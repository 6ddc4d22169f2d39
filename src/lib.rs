//! # Switchcord Catalog
//!
//! Thin async client for the IGDB game catalog, used to look up Nintendo
//! Switch titles (Nintendo has no official catalog API):
//! - One POST-based query per search, 30 second timeout, no retries
//! - Results filtered to Switch main-game entries, capped at 10
//! - Every failure path classified: transport, HTTP status, body read,
//!   malformed payload
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use switchcord_catalog::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = CatalogClient::new(CatalogConfig::default());
//!
//!     let games = client.search("breath of the wild").await?;
//!     for game in &games {
//!         println!("{} ({})", game.name, game.slug);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod record;

// Re-export primary types
pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use record::{ApiError, GameRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
