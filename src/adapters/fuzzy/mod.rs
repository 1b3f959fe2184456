//! Fuzzy name matching
//!
//! Implements the `SimilaritySearch` port on top of the `strsim` crate.

mod edit_distance;

pub use edit_distance::{EditDistanceSearch, normalize_tokens};
