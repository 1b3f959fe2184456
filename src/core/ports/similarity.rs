//! Approximate string matching port
//!
//! Defines the contract every fuzzy-search algorithm must honour so it can be
//! plugged into the catalog index.

/// Approximate name similarity
///
/// Scores are distances normalised to `[0, 1]`: `0` is identical, `1` shares
/// nothing. Lower is a better match.
pub trait SimilaritySearch: Send + Sync {
    /// Distance between `query` and `candidate`, in `[0, 1]`
    fn score(&self, query: &str, candidate: &str) -> f64;

    /// Score every corpus entry against `query`
    ///
    /// Returns `(corpus_index, score)` pairs sorted by ascending score. Ties
    /// keep corpus order.
    fn search(&self, query: &str, corpus: &[&str]) -> Vec<(usize, f64)> {
        let mut scored: Vec<(usize, f64)> = corpus
            .iter()
            .enumerate()
            .map(|(idx, candidate)| (idx, self.score(query, candidate).clamp(0.0, 1.0)))
            .collect();
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored
    }
}
