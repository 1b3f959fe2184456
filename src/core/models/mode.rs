//! Pipeline operating mode

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// How the ranking pipeline is asked to run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchMode {
    /// Evaluate a single market, unranked
    Detail {
        /// Market to evaluate
        target_market_id: String,
        /// Optional user position for the distance figure
        #[serde(default)]
        user_location: Option<Coordinate>,
    },
    /// Compare every candidate market near the user
    Compare {
        /// User position (required)
        #[serde(default)]
        user_location: Option<Coordinate>,
        /// Search radius in km
        radius_km: f64,
    },
}

impl SearchMode {
    /// The user position, if supplied
    #[must_use]
    pub const fn user_location(&self) -> Option<Coordinate> {
        match self {
            Self::Detail { user_location, .. } | Self::Compare { user_location, .. } => {
                *user_location
            },
        }
    }
}
