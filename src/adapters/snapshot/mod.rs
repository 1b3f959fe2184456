//! Snapshot-backed data providers
//!
//! A snapshot is a JSON document holding pre-fetched shopping lists, markets
//! and catalogs. It implements both provider ports in memory.
//!
//! - [`file`] - Read and write snapshot files
//! - [`provider`] - `ListItemProvider` and `MarketCatalogProvider` implementations

pub mod file;
pub mod provider;

pub use file::{Snapshot, load_snapshot, save_snapshot};
