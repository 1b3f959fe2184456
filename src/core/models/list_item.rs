//! Shopping list item model

use serde::{Deserialize, Serialize};

/// One entry of a shopping list, with product metadata already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// List item identifier
    pub id: String,

    /// Identifier of the requested product
    pub product_id: String,

    /// Display name of the requested product, used for approximate lookup
    pub product_name: String,

    /// Brand the user asked for, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_brand: Option<String>,

    /// Number of units requested
    pub quantity: u32,
}

impl ListItem {
    /// Create an unbranded list item
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            product_name: product_name.into(),
            product_brand: None,
            quantity,
        }
    }

    /// Attach a brand requirement
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.product_brand = Some(brand.into());
        self
    }

    /// The requested brand, trimmed, or `None` when absent or blank
    #[must_use]
    pub fn requested_brand(&self) -> Option<&str> {
        self.product_brand
            .as_deref()
            .map(str::trim)
            .filter(|brand| !brand.is_empty())
    }
}
