//! Command implementations

use std::path::Path;

use cartwise::adapters::EditDistanceSearch;
use cartwise::config::EngineConfig;
use cartwise::core::services::RankingPipeline;

mod compare;
mod config;
mod detail;

pub use compare::compare;
pub use config::config;
pub use detail::detail;

/// Pipeline with the configured tunables and the edit-distance matcher
fn build_pipeline(
    config_path: Option<&Path>,
) -> anyhow::Result<RankingPipeline<EditDistanceSearch>> {
    let config = EngineConfig::load(config_path)?;
    Ok(RankingPipeline::new(config, EditDistanceSearch::new())?)
}
