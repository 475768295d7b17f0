#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadwerk/enrich/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for company enrichment.
//!
//! This crate provides the foundational abstractions for enriching raw
//! company records with facts extracted from official disclosures:
//!
//! - [`ReportSource`](source::ReportSource) - Lookup client over a disclosure registry
//! - [`CompanyDirectory`](source::CompanyDirectory) - Read access to the raw company listing
//! - [`EnrichedStore`](store::EnrichedStore) - Persistence for enrichment results
//! - [`RawCompany`](types::RawCompany) / [`EnrichedCompany`](types::EnrichedCompany) - Input and output records
//! - [`ReportEntry`](types::ReportEntry) / [`ScoredCandidate`](types::ScoredCandidate) - Transient match data

/// Error types for enrichment operations.
pub mod error;
/// Lookup and directory traits for fetching disclosure data.
pub mod source;
/// Store trait for persisting enrichment results.
pub mod store;
/// Core data types (RawCompany, ReportEntry, EnrichedCompany, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use error::{EnrichError, Result};
pub use source::{CompanyDirectory, ReportSource};
pub use store::EnrichedStore;
pub use types::{BASELINE_CONFIDENCE, EnrichedCompany, RawCompany, ReportEntry, ScoredCandidate};
