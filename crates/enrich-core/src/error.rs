//! Error types for enrichment operations.
//!
//! This module defines [`EnrichError`] which covers all error cases that can
//! occur when looking up, matching, extracting, or persisting company data.

use thiserror::Error;

/// Errors that can occur during enrichment operations.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// A registry lookup failed (connection failure, bad status, timeout).
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// Rate limit exceeded at the lookup service.
    #[error("Rate limited by {service}: retry after {retry_after:?}")]
    RateLimited {
        /// The service that rate limited the request.
        service: String,
        /// Suggested time to wait before retrying.
        retry_after: Option<std::time::Duration>,
    },

    /// No disclosure candidate reached the acceptance threshold for a name.
    #[error("No acceptable disclosure found for {0}")]
    NoCandidate(String),

    /// Error parsing a payload, date, or number from the lookup service.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error reading from or writing to the store.
    #[error("Store error: {0}")]
    Store(String),

    /// An invalid parameter was provided.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`EnrichError`].
pub type Result<T> = std::result::Result<T, EnrichError>;
