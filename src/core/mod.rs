//! Core domain logic for cartwise
//!
//! This module contains the market-offer matching and ranking engine as pure
//! input-to-output computation with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ListItem`, `CatalogEntry`, `Market`, `MarketOffer`)
//! - `services/` - Distance, catalog index, resolver, scorer, ranking pipeline
//! - `ports/` - Trait definitions for fuzzy search and data providers
//! - `error` - Fatal request errors

pub mod error;
pub mod models;
pub mod ports;
pub mod services;

pub use error::RankingError;
