//! Store trait for persisting enrichment results.
//!
//! This module defines the [`EnrichedStore`] trait that provides a unified
//! interface for writing and reading [`EnrichedCompany`] records.

use async_trait::async_trait;

use crate::{error::Result, types::EnrichedCompany};

/// Trait for persisting enrichment results.
///
/// Implementations can store records in various backends (SQLite, in-memory,
/// etc.). Writes are keyed by `company_id` with upsert semantics: writing a
/// record for an already-enriched company overwrites the previous record so
/// that at most one live record exists per company.
#[async_trait]
pub trait EnrichedStore: Send + Sync {
    /// Inserts or overwrites the enrichment record for a company.
    async fn upsert(&self, record: &EnrichedCompany) -> Result<()>;

    /// Retrieves the enrichment record for a company.
    ///
    /// Returns `Ok(None)` when the company has not been enriched.
    async fn get(&self, company_id: i64) -> Result<Option<EnrichedCompany>>;

    /// Removes all enrichment records.
    async fn clear(&self) -> Result<()>;
}
