//! Compare markets near the user

use std::path::Path;

use cartwise::adapters::snapshot::load_snapshot;
use cartwise::core::models::{Coordinate, SearchMode};
use cartwise::core::services::OfferService;
use cartwise::output::{OfferReport, OutputMode};

use super::build_pipeline;

/// Rank every market within `radius_km` of the user for one list
pub fn compare(
    snapshot_path: &Path,
    list_id: &str,
    location: Option<(f64, f64)>,
    radius_km: f64,
    config_path: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config_path)?;
    let snapshot = load_snapshot(snapshot_path)?;
    let service = OfferService::new(&pipeline, &snapshot, &snapshot);

    let search = SearchMode::Compare {
        user_location: location.map(|(lat, lng)| Coordinate::new(lat, lng)),
        radius_km,
    };
    let offers = service.offers(list_id, &search)?;

    OfferReport::compare(list_id, offers).render(mode);
    Ok(())
}
