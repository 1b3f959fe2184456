//! Snapshot file format
//!
//! ```json
//! {
//!   "lists": { "weekly": [ { "id": "1", "product_id": "rice", ... } ] },
//!   "markets": [ { "id": "m1", "name": "Corner Store", "latitude": -23.5, "longitude": -46.6 } ],
//!   "catalogs": { "m1": [ { "product_id": "rice", "price": 5.0, ... } ] }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{CatalogEntry, ListItem, Market};

/// Pre-fetched lists, markets and catalogs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Shopping lists keyed by list id
    #[serde(default)]
    pub lists: HashMap<String, Vec<ListItem>>,

    /// Every known market
    #[serde(default)]
    pub markets: Vec<Market>,

    /// Catalog entries keyed by market id
    #[serde(default)]
    pub catalogs: HashMap<String, Vec<CatalogEntry>>,
}

/// Read a snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    log::debug!(
        "Loaded snapshot {}: {} list(s), {} market(s)",
        path.display(),
        snapshot.lists.len(),
        snapshot.markets.len()
    );
    Ok(snapshot)
}

/// Write a snapshot as pretty JSON
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}
