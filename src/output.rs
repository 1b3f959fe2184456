//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{MarketOffer, MatchType};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Which pipeline mode produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// One market, unranked
    Detail,
    /// Every nearby market, ranked
    Compare,
}

/// Result of a detail or compare run
#[derive(Debug, Serialize)]
pub struct OfferReport {
    /// Mode that produced the offers
    pub mode: ReportMode,
    /// The evaluated shopping list
    pub list_id: String,
    /// Offers in output order
    pub offers: Vec<MarketOffer>,
}

impl OfferReport {
    /// Report for a comparison run
    #[must_use]
    pub fn compare(list_id: &str, offers: Vec<MarketOffer>) -> Self {
        Self {
            mode: ReportMode::Compare,
            list_id: list_id.to_string(),
            offers,
        }
    }

    /// Report for a single-market run
    #[must_use]
    pub fn detail(list_id: &str, offers: Vec<MarketOffer>) -> Self {
        Self {
            mode: ReportMode::Detail,
            list_id: list_id.to_string(),
            offers,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{self}"),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        self.to_string()
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl fmt::Display for OfferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.offers.is_empty() {
            return writeln!(f, "No market nearby can fulfil list {}.", self.list_id);
        }

        if self.mode == ReportMode::Compare {
            writeln!(f, "Compared {} market(s) for list {}\n", self.offers.len(), self.list_id)?;
        }

        for (rank, offer) in self.offers.iter().enumerate() {
            let title = offer.address.as_ref().map_or_else(
                || offer.name.clone(),
                |address| format!("{} ({address})", offer.name),
            );
            if offer.is_recommended {
                writeln!(f, "{:>2}. {} {}", rank + 1, title.bold(), "[recommended]".green())?;
            } else {
                writeln!(f, "{:>2}. {title}", rank + 1)?;
            }

            writeln!(
                f,
                "    total {:.2} | coverage {}% ({} missing, {} substituted) | {:.1} km | \
                 real cost {:.2}",
                offer.total_price,
                offer.coverage_percent,
                offer.missing_items_count,
                offer.substituted_items_count,
                offer.distance_km,
                offer.real_cost
            )?;
            writeln!(f, "    prices as of {}", offer.last_update.format("%Y-%m-%d %H:%M"))?;

            for m in &offer.matches {
                let line = format!(
                    "      - item {} x{} -> {} @ {:.2} [{}]",
                    m.list_item_id, m.quantity, m.name, m.price, m.match_type
                );
                if m.match_type == MatchType::CheapestSub {
                    writeln!(f, "{}", line.yellow())?;
                } else {
                    writeln!(f, "{line}")?;
                }
            }
            if !offer.missing_item_ids.is_empty() {
                writeln!(f, "      missing: {}", offer.missing_item_ids.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
