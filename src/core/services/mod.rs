//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`distance`] - Great-circle distance and radius narrowing
//! - [`catalog_index`] - Per-market exact and approximate lookup
//! - [`resolver`] - Resolve one list item against one catalog
//! - [`scorer`] - Aggregate resolutions into a market offer
//! - [`ranking`] - Evaluate markets, then filter, sort and recommend
//! - [`offers`] - Drive the pipeline from data providers

pub mod catalog_index;
pub mod distance;
pub mod offers;
pub mod ranking;
pub mod resolver;
pub mod scorer;

pub use catalog_index::{Candidate, CatalogIndex};
pub use distance::{EARTH_RADIUS_KM, distance_km, markets_within_radius};
pub use offers::OfferService;
pub use ranking::{CatalogsByMarket, RankingPipeline, rank_offers};
pub use resolver::MatchResolver;
pub use scorer::{coverage_percent, score_market};
