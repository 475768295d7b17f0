#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadwerk/enrich/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Store implementations for the enrichment pipeline.
//!
//! This crate provides implementations of the [`EnrichedStore`] and
//! [`CompanyDirectory`] traits from `enrich-core`:
//!
//! - [`SqliteStore`] - Persistent SQLite-backed store (default, requires `sqlite` feature)
//! - [`MemoryStore`] - Simple in-memory store for testing
//! - [`NoopStore`] - No-op store that doesn't persist anything

/// In-memory store implementation.
pub mod memory;
/// No-op store implementation.
pub mod noop;

/// SQLite-backed store implementation.
#[cfg(feature = "sqlite")]
pub mod sqlite;

// Re-export the traits for convenience
pub use enrich_core::{CompanyDirectory, EnrichedStore};

// Re-export implementations
pub use memory::MemoryStore;
pub use noop::NoopStore;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
