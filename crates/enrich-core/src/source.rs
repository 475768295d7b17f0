//! Lookup and directory traits for fetching disclosure data.
//!
//! This module defines the two read-side collaborators of the pipeline:
//!
//! - [`ReportSource`] - A client over a public disclosure registry
//! - [`CompanyDirectory`] - Read access to the raw company listing

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{RawCompany, ReportEntry},
};

/// A lookup client over a public disclosure registry.
///
/// Implementations take a free-text search query (a company name or one of
/// its search variants) and return whatever disclosure entries the registry
/// associates with it. The registry's own matching behavior is opaque: the
/// same query may return different result sets over time, and the caller is
/// responsible for scoring what comes back.
#[async_trait]
pub trait ReportSource: Send + Sync + Debug {
    /// Returns the name of this source (e.g. "bundesanzeiger").
    ///
    /// The name is stamped into every [`EnrichedCompany`](crate::EnrichedCompany)
    /// produced from this source's disclosures.
    fn name(&self) -> &str;

    /// Returns a description of this source.
    fn description(&self) -> &str;

    /// Fetches disclosure entries matching a search query.
    ///
    /// Returns an empty vector when the registry has no results for the
    /// query. Errors indicate transport or payload failures, not "no
    /// results"; callers treat them as zero candidates for the query.
    async fn fetch_reports(&self, query: &str) -> Result<Vec<ReportEntry>>;
}

/// Read access to the raw company listing.
///
/// The enrichment side never mutates the listing; collection writes it,
/// enrichment only reads it.
#[async_trait]
pub trait CompanyDirectory: Send + Sync {
    /// Returns all raw companies awaiting enrichment.
    async fn list_companies(&self) -> Result<Vec<RawCompany>>;

    /// Looks up a single raw company by its exact collected name.
    ///
    /// Returns `Ok(None)` when no company with that name exists.
    async fn find_by_name(&self, name: &str) -> Result<Option<RawCompany>>;
}
