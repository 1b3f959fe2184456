//! Evaluate a single market

use std::path::Path;

use cartwise::adapters::snapshot::load_snapshot;
use cartwise::core::models::{Coordinate, SearchMode};
use cartwise::core::services::OfferService;
use cartwise::output::{OfferReport, OutputMode};

use super::build_pipeline;

/// Show what one market offers for one list, unranked
pub fn detail(
    snapshot_path: &Path,
    list_id: &str,
    market_id: &str,
    location: Option<(f64, f64)>,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config_path)?;
    let snapshot = load_snapshot(snapshot_path)?;
    let service = OfferService::new(&pipeline, &snapshot, &snapshot);

    let search = SearchMode::Detail {
        target_market_id: market_id.to_string(),
        user_location: location.map(|(lat, lng)| Coordinate::new(lat, lng)),
    };
    let offers = service.offers(list_id, &search)?;

    OfferReport::detail(list_id, offers).render(mode);
    Ok(())
}
