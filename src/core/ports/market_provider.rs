//! Market and catalog provider port
//!
//! Defines the interface for fetching candidate markets and their priced
//! catalogs.

use super::super::models::{CatalogEntry, Coordinate, Market};

/// Source of markets and their catalogs
///
/// Implementations handle retrieval from whatever backs them (a snapshot
/// file, a database, a remote API). Errors abort the request unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait MarketCatalogProvider: Send + Sync {
    /// Look up a single market by id
    ///
    /// Returns `Ok(None)` when the id does not resolve.
    fn market(&self, id: &str) -> anyhow::Result<Option<Market>>;

    /// Markets within `radius_km` of `origin` (inclusive)
    fn markets_near(&self, origin: Coordinate, radius_km: f64) -> anyhow::Result<Vec<Market>>;

    /// Priced entries for one market
    fn catalog(&self, market_id: &str) -> anyhow::Result<Vec<CatalogEntry>>;
}
