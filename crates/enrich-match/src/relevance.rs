//! Relevance filtering of fetched disclosure entries.
//!
//! Registry lookups return all publication types: shareholder meeting
//! invitations, capital measures, insolvency notices. Only financial
//! reports carry the facts this pipeline extracts, and their titles are
//! formulaic enough for a keyword check.

use enrich_core::ReportEntry;

/// Title keywords that mark an entry as a financial disclosure.
///
/// Matched case-insensitively as substrings of the title.
pub const RELEVANT_KEYWORDS: [&str; 7] = [
    "jahresabschluss",
    "konzernabschluss",
    "lagebericht",
    "bilanz zum",
    "abschluss zum",
    "gewinn- und verlustrechnung",
    "jahresabschluss zum geschäftsjahr",
];

/// Returns true when the entry's title marks a financial disclosure.
///
/// Entries with empty titles are never relevant.
#[must_use]
pub fn is_relevant(entry: &ReportEntry) -> bool {
    if entry.title.is_empty() {
        return false;
    }
    let title = entry.title.to_lowercase();
    RELEVANT_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
}
