//! In-memory providers over a [`Snapshot`]

use anyhow::anyhow;

use crate::core::models::{CatalogEntry, Coordinate, ListItem, Market};
use crate::core::ports::{ListItemProvider, MarketCatalogProvider};
use crate::core::services::markets_within_radius;

use super::Snapshot;

impl ListItemProvider for Snapshot {
    fn list_items(&self, list_id: &str) -> anyhow::Result<Vec<ListItem>> {
        self.lists
            .get(list_id)
            .cloned()
            .ok_or_else(|| anyhow!("shopping list not found: {list_id}"))
    }
}

impl MarketCatalogProvider for Snapshot {
    fn market(&self, id: &str) -> anyhow::Result<Option<Market>> {
        Ok(self.markets.iter().find(|m| m.id == id).cloned())
    }

    fn markets_near(&self, origin: Coordinate, radius_km: f64) -> anyhow::Result<Vec<Market>> {
        Ok(markets_within_radius(&self.markets, origin, radius_km))
    }

    fn catalog(&self, market_id: &str) -> anyhow::Result<Vec<CatalogEntry>> {
        Ok(self.catalogs.get(market_id).cloned().unwrap_or_default())
    }
}
