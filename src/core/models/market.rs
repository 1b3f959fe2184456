//! Market model

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A store whose catalog can fulfil list items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    /// Market identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Street address, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Latitude, if recorded
    #[serde(default)]
    pub latitude: Option<f64>,

    /// Longitude, if recorded
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Market {
    /// Create a market at the given position
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Attach a street address
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// The market position, or `None` if either component is missing
    #[must_use]
    pub const fn location(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude)),
            _ => None,
        }
    }
}
