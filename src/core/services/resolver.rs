//! Match resolver - fulfils list items from one market's catalog
//!
//! Resolution precedence (first applicable rule wins):
//! 1. Exact product id
//! 2. Approximate name candidates scoring below the similarity threshold:
//!    - brand requested and carried by a candidate: that candidate
//!    - brand requested but absent: cheapest candidate, flagged as substitution
//!    - no brand requested: cheapest candidate
//! 3. Otherwise the item is missing
//!
//! Among acceptable candidates the lowest price always wins.

use crate::core::models::{ListItem, MatchOutcome, MatchType, Resolution};

use super::catalog_index::{CatalogIndex, Candidate};

/// Resolves list items against a [`CatalogIndex`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResolver {
    threshold: f64,
}

impl MatchResolver {
    /// Resolver accepting approximate candidates scoring below `threshold`
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Resolve one item
    #[must_use]
    pub fn resolve(&self, item: &ListItem, index: &CatalogIndex<'_>) -> Resolution {
        if let Some(entry) = index.exact(&item.product_id) {
            return Resolution::Matched(MatchOutcome::new(item, entry, MatchType::Exact));
        }

        let candidates = index.candidates(&item.product_name, self.threshold);
        let Some(cheapest) = cheapest(&candidates) else {
            return Resolution::Missing {
                list_item_id: item.id.clone(),
            };
        };

        let outcome = item.requested_brand().map_or_else(
            || MatchOutcome::new(item, cheapest.entry, MatchType::GenericBest),
            |brand| {
                candidates.iter().find(|c| c.entry.brand_contains(brand)).map_or_else(
                    || MatchOutcome::new(item, cheapest.entry, MatchType::CheapestSub),
                    |branded| MatchOutcome::new(item, branded.entry, MatchType::BrandVariant),
                )
            },
        );
        Resolution::Matched(outcome)
    }

    /// Resolve every item, preserving list order
    #[must_use]
    pub fn resolve_all(&self, items: &[ListItem], index: &CatalogIndex<'_>) -> Vec<Resolution> {
        items.iter().map(|item| self.resolve(item, index)).collect()
    }
}

/// Lowest-priced candidate; ties keep the closer (earlier) one
fn cheapest<'c, 'a>(candidates: &'c [Candidate<'a>]) -> Option<&'c Candidate<'a>> {
    candidates
        .iter()
        .min_by(|a, b| a.entry.price.total_cmp(&b.entry.price))
}
