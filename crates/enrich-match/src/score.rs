//! Similarity scoring and best-candidate selection.
//!
//! Scores live in `[0, 100]`. An entry can match the target name through
//! its title or through its company attribution; whichever is closer
//! counts. Selection keeps exactly one winner and resolves ties in favor of
//! the first entry encountered.

use enrich_core::{ReportEntry, ScoredCandidate};

/// Minimum score a candidate must reach to be accepted as a match.
///
/// Exactly this score is accepted; anything below is rejected.
pub const ACCEPTANCE_THRESHOLD: f64 = 75.0;

/// Normalized edit-distance similarity between two strings, in `[0, 100]`.
///
/// Case-insensitive: both inputs are lower-cased before comparison.
/// Identical strings score exactly `100.0`.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase()) * 100.0
}

/// Scores one entry against a target company name.
///
/// The entry's title and company attribution are scored independently and
/// the higher of the two wins.
#[must_use]
pub fn score_entry(target: &str, entry: &ReportEntry) -> f64 {
    let by_title = similarity(target, &entry.title);
    let by_company = similarity(target, &entry.company);
    by_title.max(by_company)
}

/// Folds a list of entries down to the single best-scoring candidate.
///
/// A later entry replaces the accumulator only when it scores strictly
/// higher, so the first entry among equals wins. Returns `None` for an
/// empty list.
#[must_use]
pub fn best_candidate<I>(target: &str, entries: I) -> Option<ScoredCandidate>
where
    I: IntoIterator<Item = ReportEntry>,
{
    entries.into_iter().fold(None, |best, entry| {
        let score = score_entry(target, &entry);
        match best {
            Some(current) if score <= current.score => Some(current),
            _ => Some(ScoredCandidate::new(entry, score)),
        }
    })
}
