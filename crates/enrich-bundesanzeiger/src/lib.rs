#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/leadwerk/enrich/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Bundesanzeiger lookup client.
//!
//! The Bundesanzeiger itself has no public JSON API; deployments run a
//! small lookup bridge next to this pipeline and point
//! [`BundesanzeigerSource`] at it. One search query returns a mapping of
//! opaque report ids to report objects; ids are meaningless outside a
//! single response and are dropped after conversion to
//! [`ReportEntry`](enrich_core::ReportEntry) values.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use enrich_core::{EnrichError, ReportEntry, ReportSource, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Instant, sleep};
use tracing::debug;

/// Source name stamped into enriched records.
const SOURCE_NAME: &str = "bundesanzeiger";

/// Default rate limit: one request per second. The registry behind the
/// bridge throttles aggressively and bans noisy clients.
const DEFAULT_RATE_LIMIT: Duration = Duration::from_secs(1);

/// User agent for HTTP requests.
const USER_AGENT: &str = "enrich/0.1 (+https://github.com/leadwerk/enrich)";

/// Rate limiter to keep a minimum interval between lookups.
#[derive(Debug)]
struct RateLimiter {
    last_request: Instant,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval: Duration) -> Self {
        Self {
            last_request: Instant::now() - min_interval,
            min_interval,
        }
    }

    async fn wait(&mut self) {
        let elapsed = self.last_request.elapsed();
        if elapsed < self.min_interval {
            sleep(self.min_interval - elapsed).await;
        }
        self.last_request = Instant::now();
    }
}

/// Lookup client over a Bundesanzeiger bridge service.
///
/// Implements [`ReportSource`]. Requests are paced to one per second by
/// default; see [`BundesanzeigerSource::with_rate_limit`].
#[derive(Debug)]
pub struct BundesanzeigerSource {
    client: reqwest::Client,
    rate_limiter: Arc<Mutex<RateLimiter>>,
    base_url: String,
}

impl BundesanzeigerSource {
    /// Creates a source talking to the bridge at `base_url`.
    ///
    /// # Example
    /// ```
    /// use enrich_bundesanzeiger::BundesanzeigerSource;
    ///
    /// let source = BundesanzeigerSource::new("http://localhost:8089");
    /// ```
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_rate_limit(base_url, DEFAULT_RATE_LIMIT)
    }

    /// Creates a source with a custom HTTP client.
    ///
    /// The default rate limiting is still applied.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(DEFAULT_RATE_LIMIT))),
            base_url: normalize_base_url(base_url),
        }
    }

    /// Creates a source with a custom minimum interval between requests.
    #[must_use]
    pub fn with_rate_limit(base_url: impl Into<String>, rate_limit: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            rate_limiter: Arc::new(Mutex::new(RateLimiter::new(rate_limit))),
            base_url: normalize_base_url(base_url),
        }
    }
}

#[async_trait]
impl ReportSource for BundesanzeigerSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn description(&self) -> &str {
        "Bundesanzeiger disclosure lookup for German company filings"
    }

    async fn fetch_reports(&self, query: &str) -> Result<Vec<ReportEntry>> {
        if query.is_empty() {
            return Err(EnrichError::InvalidParameter("Empty query".to_string()));
        }

        // Rate limit
        self.rate_limiter.lock().await.wait().await;

        let url = format!("{}/reports", self.base_url);
        debug!(query, "Fetching reports from {}", url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| EnrichError::Lookup(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EnrichError::RateLimited {
                service: SOURCE_NAME.to_string(),
                retry_after: None,
            });
        }

        if !response.status().is_success() {
            return Err(EnrichError::Lookup(format!(
                "Failed to fetch reports for '{}': HTTP {}",
                query,
                response.status()
            )));
        }

        let reports: BTreeMap<String, RawReport> = response
            .json()
            .await
            .map_err(|e| EnrichError::Parse(format!("Failed to parse reports: {e}")))?;

        debug!(query, count = reports.len(), "Reports fetched");
        Ok(reports.into_values().map(entry_from_raw).collect())
    }
}

/// Converts one raw bridge report into a [`ReportEntry`].
fn entry_from_raw(raw: RawReport) -> ReportEntry {
    let mut entry = ReportEntry::new(raw.name, raw.company).with_body(raw.report);
    if let Some(date) = raw.date.as_deref().and_then(parse_report_date) {
        entry = entry.with_date(date);
    }
    entry
}

/// Parses the bridge's date field.
///
/// The bridge passes dates through as it got them, which over time has
/// meant ISO dates, ISO timestamps with and without a zone offset, and
/// German day-first dates. Anything else becomes `None` rather than an
/// error.
fn parse_report_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }
    // RFC 3339 parsing demands an offset, so bare timestamps get their own
    // formats
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%d.%m.%Y") {
        return Some(date);
    }
    debug!(raw, "Unparseable report date");
    None
}

/// Strips trailing slashes so URL building stays predictable.
fn normalize_base_url(base_url: impl Into<String>) -> String {
    base_url.into().trim_end_matches('/').to_string()
}

// =============================================================================
// Bridge Response Types
// =============================================================================

/// One report object from the bridge's id-to-report mapping.
#[derive(Debug, Deserialize)]
struct RawReport {
    /// Report title.
    #[serde(default)]
    name: String,
    /// Company attribution.
    #[serde(default)]
    company: String,
    /// Publication date in whatever format the registry emitted.
    #[serde(default)]
    date: Option<String>,
    /// Full report body text.
    #[serde(default)]
    report: String,
    /// Raw page payload; carried by the bridge, unused here.
    #[serde(default)]
    #[allow(dead_code)]
    raw_report: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_metadata() {
        let source = BundesanzeigerSource::new("http://localhost:8089");
        assert_eq!(source.name(), "bundesanzeiger");
        assert!(!source.description().is_empty());
    }

    #[test]
    fn test_base_url_normalization() {
        let source = BundesanzeigerSource::new("http://localhost:8089///");
        assert_eq!(source.base_url, "http://localhost:8089");
    }

    #[test]
    fn test_report_date_parsing() {
        let expected = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        assert_eq!(parse_report_date("2022-12-31"), Some(expected));
        assert_eq!(parse_report_date("2022-12-31T00:00:00"), Some(expected));
        assert_eq!(parse_report_date("2022-12-31 00:00:00"), Some(expected));
        assert_eq!(parse_report_date("2022-12-31T10:00:00Z"), Some(expected));
        assert_eq!(
            parse_report_date("2022-12-31T10:00:00+01:00"),
            Some(expected)
        );
        assert_eq!(parse_report_date("31.12.2022"), Some(expected));
        assert_eq!(parse_report_date("Dezember 2022"), None);
        assert_eq!(parse_report_date(""), None);
    }

    #[test]
    fn test_response_mapping() {
        let payload = r#"{
            "a3f9c1": {
                "name": "Jahresabschluss zum Geschäftsjahr vom 01.01.2022 bis zum 31.12.2022",
                "company": "Muster Stahlbau GmbH",
                "date": "2023-06-14",
                "report": "Der Umsatz betrug 4,2 Mio EUR."
            },
            "b7e502": {
                "company": "Muster Stahlbau GmbH",
                "date": "kein Datum"
            }
        }"#;

        let reports: BTreeMap<String, RawReport> = serde_json::from_str(payload).unwrap();
        let entries: Vec<ReportEntry> = reports.into_values().map(entry_from_raw).collect();

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].title,
            "Jahresabschluss zum Geschäftsjahr vom 01.01.2022 bis zum 31.12.2022"
        );
        assert_eq!(entries[0].company, "Muster Stahlbau GmbH");
        assert_eq!(
            entries[0].date,
            Some(NaiveDate::from_ymd_opt(2023, 6, 14).unwrap())
        );
        assert_eq!(entries[0].body, "Der Umsatz betrug 4,2 Mio EUR.");

        // Missing fields default, unparseable dates become None
        assert_eq!(entries[1].title, "");
        assert_eq!(entries[1].date, None);
        assert_eq!(entries[1].body, "");
    }

    #[tokio::test]
    async fn test_empty_query_rejected() {
        let source = BundesanzeigerSource::new("http://localhost:8089");
        let err = source.fetch_reports("").await.unwrap_err();
        assert!(matches!(err, EnrichError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_rate_limiter_paces_requests() {
        let mut limiter = RateLimiter::new(Duration::from_millis(50));

        // The first request goes through immediately, the second has to
        // wait out the interval
        let start = Instant::now();
        limiter.wait().await;
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
