//! Domain models for cartwise
//!
//! Pure data structures with no I/O dependencies. Everything here is built
//! fresh per request from caller-supplied data.
//!
//! - [`ListItem`] - "I want this, this many times"
//! - [`CatalogEntry`] - "This market sells this at this price"
//! - [`Market`] - A store with a position
//! - [`MatchType`] / [`MatchOutcome`] / [`Resolution`] - How an item was fulfilled
//! - [`MarketOffer`] - A scored market
//! - [`SearchMode`] - Detail or comparison

mod catalog;
mod coordinate;
mod list_item;
mod market;
mod match_type;
mod mode;
mod offer;
mod outcome;

pub use catalog::CatalogEntry;
pub use coordinate::Coordinate;
pub use list_item::ListItem;
pub use market::Market;
pub use match_type::MatchType;
pub use mode::SearchMode;
pub use offer::MarketOffer;
pub use outcome::{MatchOutcome, Resolution};
