//! Per-item match results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogEntry, ListItem, MatchType};

/// A list item fulfilled by a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The list item this outcome fulfils
    pub list_item_id: String,

    /// Matched product id
    pub product_id: String,

    /// Matched product name
    pub name: String,

    /// Matched product brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Unit price of the matched entry
    pub price: f64,

    /// Units requested by the list item
    pub quantity: u32,

    /// `price * quantity`
    pub line_total: f64,

    /// How the match was made
    pub match_type: MatchType,

    /// Set when the requested brand could not be honoured
    pub is_substitution: bool,

    /// Price timestamp of the matched entry
    pub last_updated_at: DateTime<Utc>,
}

impl MatchOutcome {
    /// Build an outcome for `item` fulfilled by `entry`
    #[must_use]
    pub fn new(item: &ListItem, entry: &CatalogEntry, match_type: MatchType) -> Self {
        Self {
            list_item_id: item.id.clone(),
            product_id: entry.product_id.clone(),
            name: entry.product_name.clone(),
            brand: entry.product_brand.clone(),
            price: entry.price,
            quantity: item.quantity,
            line_total: entry.price * f64::from(item.quantity),
            match_type,
            is_substitution: match_type.is_substitution(),
            last_updated_at: entry.last_updated_at,
        }
    }
}

/// Result of resolving one list item against one catalog
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The item can be fulfilled
    Matched(MatchOutcome),
    /// No acceptable catalog entry
    Missing {
        /// The unfulfilled list item
        list_item_id: String,
    },
}

impl Resolution {
    /// Classification of this resolution
    #[must_use]
    pub const fn match_type(&self) -> MatchType {
        match self {
            Self::Matched(outcome) => outcome.match_type,
            Self::Missing { .. } => MatchType::Missing,
        }
    }

    /// The list item this resolution belongs to
    #[must_use]
    pub fn list_item_id(&self) -> &str {
        match self {
            Self::Matched(outcome) => &outcome.list_item_id,
            Self::Missing { list_item_id } => list_item_id,
        }
    }

    /// The outcome, if matched
    #[must_use]
    pub const fn outcome(&self) -> Option<&MatchOutcome> {
        match self {
            Self::Matched(outcome) => Some(outcome),
            Self::Missing { .. } => None,
        }
    }
}
