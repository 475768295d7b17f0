//! The variant/fetch/filter/score resolution loop.
//!
//! A resolution queries the source once per search variant, keeps the single
//! best relevant candidate across all variants, and accepts it only at or
//! above the threshold. Failures stay soft: a dead variant contributes zero
//! candidates, and an unmatched company yields `None` rather than an error.

use enrich_core::{ReportEntry, ReportSource, ScoredCandidate};
use tracing::{debug, warn};

use crate::relevance::is_relevant;
use crate::score::{ACCEPTANCE_THRESHOLD, best_candidate};
use crate::variants::VariantGenerator;

/// Resolves company names to their best-matching disclosure entry.
#[derive(Debug, Default)]
pub struct Resolver {
    variants: VariantGenerator,
}

impl Resolver {
    /// Creates a resolver with the default variant generator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            variants: VariantGenerator::new(),
        }
    }

    /// Finds the best acceptable disclosure for a company name.
    ///
    /// Empty variants are skipped without a query. Ties across variants keep
    /// the candidate from the earlier variant; within one response the
    /// earlier entry wins. Scoring always runs against the original
    /// collected name, not the variant that triggered the hit.
    pub async fn resolve(
        &self,
        source: &dyn ReportSource,
        company_name: &str,
    ) -> Option<ScoredCandidate> {
        let mut best: Option<ScoredCandidate> = None;

        for variant in self.variants.variants(company_name) {
            if variant.is_empty() {
                continue;
            }
            let entries = fetch_or_empty(source, &variant).await;
            let relevant = entries.into_iter().filter(is_relevant);
            let Some(winner) = best_candidate(company_name, relevant) else {
                continue;
            };
            debug!(
                variant = %variant,
                title = %winner.entry.title,
                score = winner.score,
                "variant best candidate"
            );
            if best.as_ref().is_none_or(|b| winner.score > b.score) {
                best = Some(winner);
            }
        }

        match best {
            Some(candidate) if candidate.score >= ACCEPTANCE_THRESHOLD => {
                debug!(
                    company = company_name,
                    title = %candidate.entry.title,
                    score = candidate.score,
                    "accepted disclosure match"
                );
                Some(candidate)
            }
            Some(candidate) => {
                debug!(
                    company = company_name,
                    score = candidate.score,
                    "best candidate below acceptance threshold"
                );
                None
            }
            None => {
                debug!(company = company_name, "no relevant disclosures returned");
                None
            }
        }
    }
}

/// Fetches entries for one query, degrading failures to empty results.
///
/// A lookup failure on one variant must not abort the whole resolution, so
/// errors are logged and swallowed here. There is no retry; the next
/// variant is the retry.
pub async fn fetch_or_empty(source: &dyn ReportSource, query: &str) -> Vec<ReportEntry> {
    match source.fetch_reports(query).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!(query, error = %e, "lookup failed, treating as empty result");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use enrich_core::{EnrichError, Result};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct ScriptedSource {
        responses: HashMap<String, Vec<ReportEntry>>,
        failing: Vec<String>,
        queries: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn respond(mut self, query: &str, entries: Vec<ReportEntry>) -> Self {
            self.responses.insert(query.to_string(), entries);
            self
        }

        fn fail_on(mut self, query: &str) -> Self {
            self.failing.push(query.to_string());
            self
        }
    }

    #[async_trait]
    impl ReportSource for ScriptedSource {
        fn name(&self) -> &str {
            "scripted"
        }

        fn description(&self) -> &str {
            "Scripted lookup responses for tests"
        }

        async fn fetch_reports(&self, query: &str) -> Result<Vec<ReportEntry>> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.failing.iter().any(|q| q == query) {
                return Err(EnrichError::Lookup("scripted failure".into()));
            }
            Ok(self.responses.get(query).cloned().unwrap_or_default())
        }
    }

    fn relevant_entry(company: &str) -> ReportEntry {
        ReportEntry::new("Jahresabschluss zum 31.12.2022", company)
    }

    #[tokio::test]
    async fn resolves_exact_match_at_100() {
        let source =
            ScriptedSource::default().respond("Muster", vec![relevant_entry("Muster GmbH")]);
        let best = Resolver::new()
            .resolve(&source, "Muster GmbH")
            .await
            .unwrap();
        assert_eq!(best.score, 100.0);
        assert_eq!(best.entry.company, "Muster GmbH");
    }

    #[tokio::test]
    async fn rejects_everything_below_threshold() {
        let source = ScriptedSource::default()
            .respond("Muster", vec![relevant_entry("Völlig Anderer Name AG")]);
        let best = Resolver::new().resolve(&source, "Muster GmbH").await;
        assert!(best.is_none());
    }

    #[tokio::test]
    async fn accepts_exactly_at_threshold() {
        let source = ScriptedSource::default().respond("abcd", vec![relevant_entry("abcx")]);
        let best = Resolver::new().resolve(&source, "abcd").await.unwrap();
        assert_eq!(best.score, 75.0);
    }

    #[tokio::test]
    async fn irrelevant_entries_are_never_scored() {
        let entry = ReportEntry::new("Einladung zur Hauptversammlung", "Muster GmbH");
        let source = ScriptedSource::default().respond("Muster", vec![entry]);
        let best = Resolver::new().resolve(&source, "Muster GmbH").await;
        assert!(best.is_none());
    }

    #[tokio::test]
    async fn lookup_failure_on_one_variant_does_not_abort() {
        let source = ScriptedSource::default()
            .fail_on("MUSTER")
            .respond("muster", vec![relevant_entry("Muster GmbH")]);
        let best = Resolver::new()
            .resolve(&source, "Muster GmbH")
            .await
            .unwrap();
        assert_eq!(best.score, 100.0);
    }

    #[tokio::test]
    async fn empty_variants_are_never_queried() {
        let source = ScriptedSource::default();
        let best = Resolver::new().resolve(&source, "GmbH").await;
        assert!(best.is_none());
        let queries = source.queries.lock().unwrap();
        assert_eq!(queries.as_slice(), ["GmbH"]);
    }

    #[tokio::test]
    async fn ties_keep_the_earlier_variant() {
        let first = relevant_entry("Muster GmbH").with_body("from MUSTER");
        let second = relevant_entry("Muster GmbH").with_body("from muster");
        let source = ScriptedSource::default()
            .respond("MUSTER", vec![first])
            .respond("muster", vec![second]);
        let best = Resolver::new()
            .resolve(&source, "Muster GmbH")
            .await
            .unwrap();
        // BTreeSet iteration visits "MUSTER" before "muster"
        assert_eq!(best.entry.body, "from MUSTER");
    }
}
