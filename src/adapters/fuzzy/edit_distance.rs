//! Edit-distance similarity over product names
//!
//! Names are normalised to lowercase alphanumeric tokens. The score is the
//! best of two normalised Levenshtein distances:
//!
//! 1. the whole query against the whole candidate
//! 2. the whole query against every run of consecutive candidate tokens with
//!    as many tokens as the query (so "milk" finds "Whole Milk 1L")

use strsim::normalized_levenshtein;

use crate::core::ports::SimilaritySearch;

/// Levenshtein-ratio [`SimilaritySearch`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditDistanceSearch;

impl EditDistanceSearch {
    /// Create the default matcher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SimilaritySearch for EditDistanceSearch {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        let query = normalize_tokens(query);
        let candidate = normalize_tokens(candidate);
        if query.is_empty() || candidate.is_empty() {
            return 1.0;
        }

        let joined_query = query.join(" ");
        let mut best = 1.0 - normalized_levenshtein(&joined_query, &candidate.join(" "));

        if candidate.len() > query.len() {
            for window in candidate.windows(query.len()) {
                let distance = 1.0 - normalized_levenshtein(&joined_query, &window.join(" "));
                best = best.min(distance);
            }
        }

        best.clamp(0.0, 1.0)
    }
}

/// Lowercase alphanumeric tokens of `s`
#[must_use]
pub fn normalize_tokens(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
