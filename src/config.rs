//! Engine configuration
//!
//! Every tunable constant of the ranking engine lives here so nothing is
//! hardcoded in the services. Config is read from TOML; missing keys fall back
//! to the defaults below. Without an explicit path, `~/.cartwise/engine.toml`
//! is used when it exists.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::RankingError;
use crate::paths;

/// Tunables for matching, travel cost and execution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum accepted approximate-match distance (exclusive)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Multiplier applied to the one-way distance (2 = there and back)
    #[serde(default = "default_travel_round_trip_factor")]
    pub travel_round_trip_factor: f64,

    /// Monetary cost per travelled km
    #[serde(default = "default_travel_rate_per_km")]
    pub travel_rate_per_km: f64,

    /// Evaluate markets on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

const fn default_similarity_threshold() -> f64 {
    0.4
}

const fn default_travel_round_trip_factor() -> f64 {
    2.0
}

const fn default_travel_rate_per_km() -> f64 {
    1.5
}

const fn default_parallel() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            travel_round_trip_factor: default_travel_round_trip_factor(),
            travel_rate_per_km: default_travel_rate_per_km(),
            parallel: default_parallel(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, else from the user config file, else defaults
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        let user_config = paths::user_engine_config();
        if user_config.exists() {
            log::debug!("Using engine config at {}", user_config.display());
            Self::from_file(&user_config)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values outside their domain
    pub fn validate(&self) -> Result<(), RankingError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(RankingError::InvalidConfig(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if !self.travel_round_trip_factor.is_finite() || self.travel_round_trip_factor < 0.0 {
            return Err(RankingError::InvalidConfig(format!(
                "travel_round_trip_factor must be non-negative, got {}",
                self.travel_round_trip_factor
            )));
        }
        if !self.travel_rate_per_km.is_finite() || self.travel_rate_per_km < 0.0 {
            return Err(RankingError::InvalidConfig(format!(
                "travel_rate_per_km must be non-negative, got {}",
                self.travel_rate_per_km
            )));
        }
        Ok(())
    }

    /// Travel penalty for a market `distance_km` away
    #[must_use]
    pub fn travel_cost(&self, distance_km: f64) -> f64 {
        distance_km * self.travel_round_trip_factor * self.travel_rate_per_km
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
