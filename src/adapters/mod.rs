//! Adapter implementations for port traits
//!
//! - `fuzzy/` - `SimilaritySearch` backed by `strsim` edit distance
//! - `snapshot/` - List and market providers backed by a JSON snapshot file

pub mod fuzzy;
pub mod snapshot;

pub use fuzzy::EditDistanceSearch;
pub use snapshot::Snapshot;
