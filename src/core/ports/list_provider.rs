//! Shopping list provider port

use super::super::models::ListItem;

/// Source of shopping list items with resolved product metadata
///
/// Errors are upstream failures and abort the request unchanged.
#[cfg_attr(test, mockall::automock)]
pub trait ListItemProvider: Send + Sync {
    /// All items of the given list
    fn list_items(&self, list_id: &str) -> anyhow::Result<Vec<ListItem>>;
}
