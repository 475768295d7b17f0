#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadwerk/enrich/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Name matching for company enrichment.
//!
//! Resolution runs in four steps, each usable on its own:
//!
//! - [`VariantGenerator`](variants::VariantGenerator) - search variants from a raw name
//! - [`is_relevant`](relevance::is_relevant) - keep only financial disclosures
//! - [`best_candidate`](score::best_candidate) - fold entries down to the best score
//! - [`Resolver`](resolver::Resolver) - the full variant/fetch/score loop

/// Relevance filtering of fetched disclosure entries.
pub mod relevance;
/// The variant/fetch/filter/score resolution loop.
pub mod resolver;
/// Similarity scoring and best-candidate selection.
pub mod score;
/// Search variant generation and legal-form detection.
pub mod variants;

// Re-export commonly used items at crate root
pub use relevance::{RELEVANT_KEYWORDS, is_relevant};
pub use resolver::{Resolver, fetch_or_empty};
pub use score::{ACCEPTANCE_THRESHOLD, best_candidate, score_entry, similarity};
pub use variants::VariantGenerator;
