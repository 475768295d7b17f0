#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadwerk/enrich/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Pattern-rule extraction of financial facts from report text.
//!
//! - [`ReportExtractor`](extractor::ReportExtractor) - runs the cascades over a report body
//! - [`ExtractedFacts`](extractor::ExtractedFacts) - the per-field results
//! - [`parse_german_number`](numeric::parse_german_number) - German numeric normalization
//!
//! Each cascade is an ordered list of rule objects with a pure `attempt`
//! operation. The first rule whose pattern matches decides the field: a
//! malformed number inside that match yields an absent field, it does not
//! hand over to later rules.

/// Balance-sheet total cascade.
mod balance;
/// Employee count cascade.
mod employees;
/// The extractor facade over all cascades.
pub mod extractor;
/// German numeric normalization.
pub mod numeric;
/// Revenue cascade.
mod revenue;

// Re-export commonly used items at crate root
pub use extractor::{ExtractedFacts, ReportExtractor};
pub use numeric::parse_german_number;
