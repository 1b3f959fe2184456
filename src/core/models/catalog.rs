//! Catalog entry model
//!
//! A catalog entry is one priced product at one market.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A priced product in a market's catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Product identifier
    pub product_id: String,

    /// Product display name
    pub product_name: String,

    /// Product brand, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_brand: Option<String>,

    /// Unit price (non-negative)
    pub price: f64,

    /// When this price was last observed
    pub last_updated_at: DateTime<Utc>,
}

impl CatalogEntry {
    /// Create an unbranded catalog entry
    #[must_use]
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        price: f64,
        last_updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            product_brand: None,
            price,
            last_updated_at,
        }
    }

    /// Attach a brand
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.product_brand = Some(brand.into());
        self
    }

    /// Whether this entry's brand contains `wanted` (case-insensitive, trimmed)
    #[must_use]
    pub fn brand_contains(&self, wanted: &str) -> bool {
        let wanted = wanted.trim().to_lowercase();
        self.product_brand
            .as_deref()
            .is_some_and(|brand| brand.trim().to_lowercase().contains(&wanted))
    }
}
