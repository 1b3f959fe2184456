//! Match classification
//!
//! How a list item was fulfilled by a market's catalog.

use serde::{Deserialize, Serialize};

/// The rule that resolved a list item against a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Same product id
    Exact,
    /// Approximate name match carrying the requested brand
    BrandVariant,
    /// Requested brand unavailable; cheapest approximate match instead
    CheapestSub,
    /// No brand requested; cheapest approximate match
    GenericBest,
    /// Nothing in the catalog is close enough
    Missing,
}

impl MatchType {
    /// Whether this outcome violates the user's brand request.
    ///
    /// Only [`MatchType::CheapestSub`] counts. A [`MatchType::GenericBest`]
    /// fulfilment is a different product too, but no brand was asked for.
    #[must_use]
    pub const fn is_substitution(self) -> bool {
        matches!(self, Self::CheapestSub)
    }

    /// Whether the item was fulfilled at all
    #[must_use]
    pub const fn is_fulfilled(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::BrandVariant => write!(f, "brand_variant"),
            Self::CheapestSub => write!(f, "cheapest_sub"),
            Self::GenericBest => write!(f, "generic_best"),
            Self::Missing => write!(f, "missing"),
        }
    }
}
