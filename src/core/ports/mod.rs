//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the ranking engine and the
//! systems around it: the fuzzy-matching algorithm, and the providers that
//! supply shopping lists, markets and catalogs.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap the fuzzy algorithm or data source without touching the resolver
//! - **Clarity**: The engine itself performs no storage or network access

mod list_provider;
mod market_provider;
mod similarity;

pub use list_provider::ListItemProvider;
pub use market_provider::MarketCatalogProvider;
pub use similarity::SimilaritySearch;

#[cfg(test)]
pub use list_provider::MockListItemProvider;
#[cfg(test)]
pub use market_provider::MockMarketCatalogProvider;
