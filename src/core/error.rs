//! Errors raised by the ranking engine
//!
//! These abort the whole request. An item without a catalog match is not an
//! error; it is reported as [`MatchType::Missing`](super::models::MatchType).

use thiserror::Error;

/// Fatal ranking errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankingError {
    /// The shopping list has no items
    #[error("shopping list is empty")]
    EmptyList,

    /// Comparison mode was requested without a user location
    #[error("comparison mode requires a user location")]
    MissingLocation,

    /// Detail mode target does not exist
    #[error("market not found: {0}")]
    MarketNotFound(String),

    /// A list item or catalog entry breaks the data model
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Engine configuration value out of range
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}
