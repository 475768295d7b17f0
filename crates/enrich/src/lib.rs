#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadwerk/enrich/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Company enrichment pipeline over German disclosure registry data.
//!
//! This crate re-exports the core types, the matching and extraction
//! building blocks, and the store implementations, and provides the
//! [`EnrichmentPipeline`] that drives them end to end.
//!
//! # Features
//!
//! - `bundesanzeiger` - Bundesanzeiger disclosure lookup source
//! - `store-sqlite` - SQLite-backed persistence
//!
//! # Example
//!
//! ```rust,ignore
//! use enrich::{BundesanzeigerSource, EnrichmentPipeline, SqliteStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> enrich::Result<()> {
//!     let source = Arc::new(BundesanzeigerSource::new("http://localhost:8089"));
//!     let store = Arc::new(SqliteStore::new("companies.db")?);
//!
//!     let pipeline = EnrichmentPipeline::new(source, store.clone());
//!     let summary = pipeline.enrich_all(store.as_ref(), Some(50)).await?;
//!     println!("enriched {}/{} companies", summary.enriched, summary.attempted);
//!
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use enrich_core::*;

// Matching and extraction building blocks
pub use enrich_extract::{ExtractedFacts, ReportExtractor};
pub use enrich_match::{ACCEPTANCE_THRESHOLD, Resolver, VariantGenerator};

// Store implementations
#[cfg(feature = "store-sqlite")]
pub use enrich_store::SqliteStore;
pub use enrich_store::{MemoryStore, NoopStore};

// Sources
#[cfg(feature = "bundesanzeiger")]
pub use enrich_bundesanzeiger::BundesanzeigerSource;

mod pipeline;
pub use pipeline::{BatchSummary, EnrichmentPipeline};
