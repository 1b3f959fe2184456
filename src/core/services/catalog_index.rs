//! Per-market catalog index
//!
//! Built once per market per request. Offers exact lookup by product id and
//! approximate lookup by product name through a [`SimilaritySearch`].

use std::collections::HashMap;

use crate::core::models::CatalogEntry;
use crate::core::ports::SimilaritySearch;

/// A catalog entry returned by an approximate lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// The matching entry
    pub entry: &'a CatalogEntry,
    /// Distance to the query in `[0, 1]`, lower is closer
    pub score: f64,
}

/// Searchable view over one market's catalog
pub struct CatalogIndex<'a> {
    entries: &'a [CatalogEntry],
    by_product_id: HashMap<&'a str, &'a CatalogEntry>,
    names: Vec<&'a str>,
    search: &'a dyn SimilaritySearch,
}

impl std::fmt::Debug for CatalogIndex<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogIndex")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<'a> CatalogIndex<'a> {
    /// Index `entries`, scoring names with `search`
    ///
    /// When a product id appears more than once, the first entry wins exact
    /// lookups.
    #[must_use]
    pub fn build(
        entries: &'a [CatalogEntry],
        search: &'a dyn SimilaritySearch,
    ) -> Self {
        let mut by_product_id = HashMap::with_capacity(entries.len());
        for entry in entries {
            by_product_id.entry(entry.product_id.as_str()).or_insert(entry);
        }
        let names = entries.iter().map(|e| e.product_name.as_str()).collect();

        Self {
            entries,
            by_product_id,
            names,
            search,
        }
    }

    /// Number of indexed entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry with exactly this product id
    #[must_use]
    pub fn exact(&self, product_id: &str) -> Option<&'a CatalogEntry> {
        self.by_product_id.get(product_id).copied()
    }

    /// Every entry scored against `name`, closest first
    #[must_use]
    pub fn search(&self, name: &str) -> Vec<Candidate<'a>> {
        if self.entries.is_empty() {
            return Vec::new();
        }
        self.search
            .search(name, &self.names)
            .into_iter()
            .filter_map(|(idx, score)| {
                self.entries.get(idx).map(|entry| Candidate { entry, score })
            })
            .collect()
    }

    /// Entries scoring strictly below `threshold`, closest first
    #[must_use]
    pub fn candidates(&self, name: &str, threshold: f64) -> Vec<Candidate<'a>> {
        self.search(name)
            .into_iter()
            .filter(|candidate| candidate.score < threshold)
            .collect()
    }
}
