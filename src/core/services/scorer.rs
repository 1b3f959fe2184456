//! Market scorer - aggregates a market's resolutions into an offer
//!
//! Pure business logic with no I/O.

use chrono::{DateTime, Utc};

use crate::config::EngineConfig;
use crate::core::models::{Market, MarketOffer, Resolution};

/// Score one market
///
/// # Arguments
///
/// * `market` - The evaluated market
/// * `distance_km` - Distance from the user (0 when unknown)
/// * `resolutions` - One resolution per list item
/// * `config` - Travel cost parameters
/// * `now` - Request instant, used as `last_update` when nothing matched
///
/// # Returns
///
/// An unranked [`MarketOffer`] (`is_recommended` is false)
#[must_use]
#[allow(clippy::float_cmp)]
pub fn score_market(
    market: &Market,
    distance_km: f64,
    resolutions: &[Resolution],
    config: &EngineConfig,
    now: DateTime<Utc>,
) -> MarketOffer {
    let total_items = resolutions.len();
    let mut matches = Vec::with_capacity(total_items);
    let mut missing_item_ids = Vec::new();

    for resolution in resolutions {
        match resolution {
            Resolution::Matched(outcome) => matches.push(outcome.clone()),
            Resolution::Missing { list_item_id } => missing_item_ids.push(list_item_id.clone()),
        }
    }

    let missing_items_count = missing_item_ids.len();
    let substituted_items_count = matches.iter().filter(|m| m.is_substitution).count();

    let total_price: f64 = if missing_items_count == total_items {
        0.0
    } else {
        matches.iter().map(|m| m.line_total).sum()
    };

    let real_cost = if total_price == 0.0 {
        0.0
    } else {
        total_price + config.travel_cost(distance_km)
    };

    let last_update = matches
        .iter()
        .map(|m| m.last_updated_at)
        .max()
        .unwrap_or(now);

    MarketOffer {
        market_id: market.id.clone(),
        name: market.name.clone(),
        address: market.address.clone(),
        total_price,
        distance_km,
        missing_items_count,
        substituted_items_count,
        total_items,
        coverage_percent: coverage_percent(total_items, missing_items_count),
        real_cost,
        is_recommended: false,
        last_update,
        matches,
        missing_item_ids,
    }
}

/// `round(100 * fulfilled / total)`, 0 for an empty list
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn coverage_percent(total_items: usize, missing_items: usize) -> u8 {
    if total_items == 0 {
        return 0;
    }
    let fulfilled = total_items.saturating_sub(missing_items);
    let pct = (100.0 * fulfilled as f64 / total_items as f64).round();
    pct.clamp(0.0, 100.0) as u8
}
