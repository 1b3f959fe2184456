//! Ranking pipeline - evaluates markets and orders their offers
//!
//! For each candidate market: build the catalog index, resolve every list
//! item, score. Market evaluations share nothing, so in comparison mode they
//! run on the rayon pool when the config allows it.
//!
//! Two modes:
//! - **Detail**: one target market, returned unfiltered and unranked
//! - **Compare**: every candidate market, then filter, sort and recommend

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::config::EngineConfig;
use crate::core::RankingError;
use crate::core::models::{CatalogEntry, Coordinate, ListItem, Market, MarketOffer, SearchMode};
use crate::core::ports::SimilaritySearch;

use super::catalog_index::CatalogIndex;
use super::distance::{distance_km, markets_within_radius};
use super::resolver::MatchResolver;
use super::scorer::score_market;

/// Catalog entries keyed by market id
pub type CatalogsByMarket = HashMap<String, Vec<CatalogEntry>>;

/// Orchestrates index building, resolution, scoring and ranking
#[derive(Debug, Clone)]
pub struct RankingPipeline<S> {
    config: EngineConfig,
    search: S,
    clock: Option<DateTime<Utc>>,
}

impl<S: SimilaritySearch> RankingPipeline<S> {
    /// Create a pipeline, rejecting out-of-range configuration
    pub fn new(config: EngineConfig, search: S) -> Result<Self, RankingError> {
        config.validate()?;
        Ok(Self {
            config,
            search,
            clock: None,
        })
    }

    /// Pin the request instant instead of reading the system clock
    #[must_use]
    pub const fn at(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run in the given mode over caller-supplied markets and catalogs
    ///
    /// In compare mode, markets farther than the radius are ignored. A market
    /// with no catalog entry in `catalogs` is evaluated against an empty one.
    pub fn run(
        &self,
        items: &[ListItem],
        mode: &SearchMode,
        markets: &[Market],
        catalogs: &CatalogsByMarket,
    ) -> Result<Vec<MarketOffer>, RankingError> {
        match mode {
            SearchMode::Detail {
                target_market_id,
                user_location,
            } => {
                ensure_items(items)?;
                let market = markets
                    .iter()
                    .find(|m| &m.id == target_market_id)
                    .ok_or_else(|| RankingError::MarketNotFound(target_market_id.clone()))?;
                let catalog = catalog_for(catalogs, &market.id);
                self.detail(items, market, catalog, *user_location).map(|offer| vec![offer])
            },
            SearchMode::Compare {
                user_location,
                radius_km,
            } => {
                ensure_items(items)?;
                let origin = user_location.ok_or(RankingError::MissingLocation)?;
                ensure_radius(*radius_km)?;
                let nearby = markets_within_radius(markets, origin, *radius_km);
                let candidates: Vec<(&Market, &[CatalogEntry])> = nearby
                    .iter()
                    .map(|market| (market, catalog_for(catalogs, &market.id)))
                    .collect();
                self.compare(items, Some(origin), &candidates)
            },
        }
    }

    /// Evaluate exactly one market
    ///
    /// The offer is returned as-is: no filtering, `is_recommended` stays false.
    pub fn detail(
        &self,
        items: &[ListItem],
        market: &Market,
        catalog: &[CatalogEntry],
        user_location: Option<Coordinate>,
    ) -> Result<MarketOffer, RankingError> {
        ensure_items(items)?;
        ensure_catalog(&market.id, catalog)?;
        Ok(self.evaluate(items, market, catalog, user_location, self.now()))
    }

    /// Evaluate every candidate market, then filter, sort and recommend
    ///
    /// Candidates are expected to be narrowed to the search radius already.
    pub fn compare(
        &self,
        items: &[ListItem],
        user_location: Option<Coordinate>,
        candidates: &[(&Market, &[CatalogEntry])],
    ) -> Result<Vec<MarketOffer>, RankingError> {
        ensure_items(items)?;
        let origin = user_location.ok_or(RankingError::MissingLocation)?;
        for (market, catalog) in candidates {
            ensure_catalog(&market.id, catalog)?;
        }
        let now = self.now();

        let offers: Vec<MarketOffer> = if self.config.parallel {
            candidates
                .par_iter()
                .map(|(market, catalog)| self.evaluate(items, market, catalog, Some(origin), now))
                .collect()
        } else {
            candidates
                .iter()
                .map(|(market, catalog)| self.evaluate(items, market, catalog, Some(origin), now))
                .collect()
        };

        let evaluated = offers.len();
        let ranked = rank_offers(offers);
        log::info!(
            "Ranked {} of {} market(s) for {} item(s)",
            ranked.len(),
            evaluated,
            items.len()
        );
        Ok(ranked)
    }

    fn evaluate(
        &self,
        items: &[ListItem],
        market: &Market,
        catalog: &[CatalogEntry],
        user_location: Option<Coordinate>,
        now: DateTime<Utc>,
    ) -> MarketOffer {
        if user_location.is_some() && market.location().is_none_or(|c| c.is_unset()) {
            log::warn!(
                "Market {} has no recorded position; distance counted as 0 km",
                market.id
            );
        }
        let distance = distance_km(user_location, market.location());
        let index = CatalogIndex::build(catalog, &self.search);
        let resolutions =
            MatchResolver::new(self.config.similarity_threshold).resolve_all(items, &index);
        let offer = score_market(market, distance, &resolutions, &self.config, now);

        log::debug!(
            "Market {}: {} entries, coverage {}%, total {:.2}, real cost {:.2}",
            market.id,
            index.len(),
            offer.coverage_percent,
            offer.total_price,
            offer.real_cost
        );
        offer
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }
}

/// Filter, sort and flag a set of scored offers
///
/// 1. Drop offers with `total_price <= 0` or `coverage_percent == 0`
/// 2. Sort by `missing_items_count` asc, then `real_cost` asc (stable)
/// 3. Recommend the first offer, clear the flag on all others
#[must_use]
pub fn rank_offers(offers: Vec<MarketOffer>) -> Vec<MarketOffer> {
    let mut ranked: Vec<MarketOffer> = offers.into_iter().filter(MarketOffer::is_usable).collect();

    ranked.sort_by(|a, b| {
        a.missing_items_count
            .cmp(&b.missing_items_count)
            .then_with(|| a.real_cost.total_cmp(&b.real_cost))
    });

    for (idx, offer) in ranked.iter_mut().enumerate() {
        offer.is_recommended = idx == 0;
    }
    ranked
}

fn ensure_items(items: &[ListItem]) -> Result<(), RankingError> {
    if items.is_empty() {
        return Err(RankingError::EmptyList);
    }
    if let Some(item) = items.iter().find(|item| item.quantity == 0) {
        return Err(RankingError::InvalidInput(format!(
            "list item {} has quantity 0",
            item.id
        )));
    }
    Ok(())
}

/// Prices must be finite and non-negative
fn ensure_catalog(market_id: &str, catalog: &[CatalogEntry]) -> Result<(), RankingError> {
    let invalid = catalog
        .iter()
        .find(|entry| !entry.price.is_finite() || entry.price < 0.0);
    if let Some(entry) = invalid {
        return Err(RankingError::InvalidInput(format!(
            "market {market_id}: product {} has price {}",
            entry.product_id, entry.price
        )));
    }
    Ok(())
}

pub(crate) fn ensure_radius(radius_km: f64) -> Result<(), RankingError> {
    if radius_km.is_finite() && radius_km >= 0.0 {
        Ok(())
    } else {
        Err(RankingError::InvalidConfig(format!(
            "search radius must be a non-negative number of km, got {radius_km}"
        )))
    }
}

fn catalog_for<'c>(catalogs: &'c CatalogsByMarket, market_id: &str) -> &'c [CatalogEntry] {
    catalogs.get(market_id).map(Vec::as_slice).unwrap_or_default()
}
