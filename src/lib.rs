//! cartwise - Market-offer matching and ranking for household shopping lists
//!
//! Given a shopping list and a set of candidate markets with priced catalogs,
//! cartwise works out per market which items can be fulfilled, at what price
//! and with what brand fidelity, then ranks markets into a single
//! recommendation that blends price and travel distance.
//!
//! The engine in [`core`] is pure input-to-output computation. Data sources
//! and the fuzzy-matching algorithm plug in through [`core::ports`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
