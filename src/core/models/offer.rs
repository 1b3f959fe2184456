//! Market offer model
//!
//! The scored view of one market for one shopping list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MatchOutcome;

/// What one market can deliver for a shopping list, and at what cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOffer {
    /// Market identifier
    pub market_id: String,

    /// Market display name
    pub name: String,

    /// Market address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Sum of `price * quantity` over matched items
    pub total_price: f64,

    /// Distance from the user in km (0 when unknown)
    pub distance_km: f64,

    /// Items this market cannot fulfil
    pub missing_items_count: usize,

    /// Items fulfilled with a brand other than the requested one
    pub substituted_items_count: usize,

    /// Size of the shopping list
    pub total_items: usize,

    /// Rounded share of fulfilled items, 0..=100
    pub coverage_percent: u8,

    /// `total_price` plus round-trip travel cost (0 when nothing is priced)
    pub real_cost: f64,

    /// Top-ranked market in comparison mode
    pub is_recommended: bool,

    /// Newest price timestamp among matches
    pub last_update: DateTime<Utc>,

    /// Fulfilled items
    pub matches: Vec<MatchOutcome>,

    /// Ids of the items this market cannot fulfil
    #[serde(default)]
    pub missing_item_ids: Vec<String>,
}

impl MarketOffer {
    /// Whether this offer can fulfil anything usable
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.total_price > 0.0 && self.coverage_percent > 0
    }
}
