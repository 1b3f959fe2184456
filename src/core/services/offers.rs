//! Offer service - runs the ranking pipeline over provider data
//!
//! Fetches the shopping list, the candidate markets and their catalogs
//! through the port traits, then hands everything to the
//! [`RankingPipeline`]. Provider failures abort the request unchanged; there
//! are no retries and no partial answers.

use crate::core::RankingError;
use crate::core::models::{CatalogEntry, Market, MarketOffer, SearchMode};
use crate::core::ports::{ListItemProvider, MarketCatalogProvider, SimilaritySearch};

use super::ranking::{RankingPipeline, ensure_radius};

/// Provider-backed entry point to the ranking engine
pub struct OfferService<'a, S> {
    pipeline: &'a RankingPipeline<S>,
    lists: &'a dyn ListItemProvider,
    markets: &'a dyn MarketCatalogProvider,
}

impl<S> std::fmt::Debug for OfferService<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfferService").finish_non_exhaustive()
    }
}

impl<'a, S: SimilaritySearch> OfferService<'a, S> {
    /// Wire a pipeline to its data providers
    #[must_use]
    pub fn new(
        pipeline: &'a RankingPipeline<S>,
        lists: &'a dyn ListItemProvider,
        markets: &'a dyn MarketCatalogProvider,
    ) -> Self {
        Self {
            pipeline,
            lists,
            markets,
        }
    }

    /// Compute offers for a shopping list
    ///
    /// Detail mode yields exactly one offer; compare mode yields zero or more,
    /// ranked, with the first one recommended.
    pub fn offers(&self, list_id: &str, mode: &SearchMode) -> anyhow::Result<Vec<MarketOffer>> {
        let items = self.lists.list_items(list_id)?;
        if items.is_empty() {
            return Err(RankingError::EmptyList.into());
        }
        log::debug!("List {list_id}: {} item(s)", items.len());

        match mode {
            SearchMode::Detail {
                target_market_id,
                user_location,
            } => {
                let market = self
                    .markets
                    .market(target_market_id)?
                    .ok_or_else(|| RankingError::MarketNotFound(target_market_id.clone()))?;
                let catalog = self.markets.catalog(&market.id)?;
                let offer = self.pipeline.detail(&items, &market, &catalog, *user_location)?;
                Ok(vec![offer])
            },
            SearchMode::Compare {
                user_location,
                radius_km,
            } => {
                let origin = user_location.ok_or(RankingError::MissingLocation)?;
                ensure_radius(*radius_km)?;
                let nearby = self.markets.markets_near(origin, *radius_km)?;
                log::debug!("{} market(s) within {radius_km} km", nearby.len());

                let catalogs = nearby
                    .iter()
                    .map(|market| self.markets.catalog(&market.id))
                    .collect::<anyhow::Result<Vec<_>>>()?;
                let candidates: Vec<(&Market, &[CatalogEntry])> = nearby
                    .iter()
                    .zip(&catalogs)
                    .map(|(market, catalog)| (market, catalog.as_slice()))
                    .collect();

                Ok(self.pipeline.compare(&items, Some(origin), &candidates)?)
            },
        }
    }
}
