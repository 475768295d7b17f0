//! Core data types for company enrichment.
//!
//! This module defines the fundamental data structures:
//!
//! - [`RawCompany`] - Raw company record awaiting enrichment
//! - [`ReportEntry`] - One disclosure entry returned by a lookup
//! - [`ScoredCandidate`] - A report entry paired with its match score
//! - [`EnrichedCompany`] - The persisted enrichment result

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed confidence score stamped on every enriched record.
///
/// This is a completeness marker inherited from the upstream data contract,
/// not a statistical quantity. Downstream consumers key on the exact value.
pub const BASELINE_CONFIDENCE: f64 = 66.7;

/// A raw company record as produced by the collection side.
///
/// Inputs are immutable: enrichment never writes back to the raw listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCompany {
    /// Stable identifier assigned by the collection side.
    pub id: i64,
    /// Company name as collected, including any legal-form suffix.
    pub name: String,
    /// Source URL the record was collected from, empty when unknown.
    pub url: String,
}

impl RawCompany {
    /// Creates a new raw company record.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            url: String::new(),
        }
    }

    /// Sets the collection URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// A single disclosure entry returned by a registry lookup.
///
/// Entries are transient: they are scored, possibly mined for facts, and
/// discarded. Only values extracted from them are persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Report title (e.g. "Jahresabschluss zum 31.12.2022").
    pub title: String,
    /// Company attribution as printed by the registry.
    pub company: String,
    /// Publication date, if the registry supplied a parseable one.
    pub date: Option<NaiveDate>,
    /// Full report body text.
    pub body: String,
}

impl ReportEntry {
    /// Creates a new report entry with required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            date: None,
            body: String::new(),
        }
    }

    /// Sets the publication date.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Sets the report body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// A report entry paired with its name-match score.
///
/// Scores live in `[0, 100]`. Exactly one candidate survives a resolution;
/// superseded candidates are dropped, not accumulated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The matched disclosure entry.
    pub entry: ReportEntry,
    /// Name similarity score in `[0, 100]`.
    pub score: f64,
}

impl ScoredCandidate {
    /// Creates a new scored candidate.
    #[must_use]
    pub const fn new(entry: ReportEntry, score: f64) -> Self {
        Self { entry, score }
    }
}

/// The enrichment result persisted per company.
///
/// At most one live record exists per `company_id`; a later enrichment run
/// overwrites the earlier record wholesale. Financial fields are independently
/// optional: extraction may find any subset of them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCompany {
    /// Identifier of the raw company this record enriches.
    pub company_id: i64,
    /// Name of the lookup source that produced the matched disclosure.
    pub source: String,
    /// URL carried over from the raw record.
    pub url: String,
    /// Revenue in millions, if a revenue phrase was found.
    pub revenue_millions: Option<f64>,
    /// Lower bound on head count, if an employee phrase was found.
    pub employee_count_min: Option<u32>,
    /// Balance-sheet total as printed in the disclosure, if found.
    pub balance_sheet_total_millions: Option<f64>,
    /// Legal form detected in the company name, empty when none.
    pub legal_form: String,
    /// Publication date as `%Y-%m-%d`, empty when the registry gave none.
    pub publication_date: String,
    /// Fixed confidence marker, always [`BASELINE_CONFIDENCE`].
    pub confidence_score: f64,
}

impl EnrichedCompany {
    /// Creates an empty enrichment record for a company.
    #[must_use]
    pub fn new(company_id: i64, source: impl Into<String>) -> Self {
        Self {
            company_id,
            source: source.into(),
            url: String::new(),
            revenue_millions: None,
            employee_count_min: None,
            balance_sheet_total_millions: None,
            legal_form: String::new(),
            publication_date: String::new(),
            confidence_score: BASELINE_CONFIDENCE,
        }
    }

    /// Sets the collection URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the extracted revenue in millions.
    #[must_use]
    pub const fn with_revenue(mut self, revenue_millions: f64) -> Self {
        self.revenue_millions = Some(revenue_millions);
        self
    }

    /// Sets the extracted minimum employee count.
    #[must_use]
    pub const fn with_employee_count(mut self, employee_count_min: u32) -> Self {
        self.employee_count_min = Some(employee_count_min);
        self
    }

    /// Sets the extracted balance-sheet total.
    #[must_use]
    pub const fn with_balance_sheet_total(mut self, total: f64) -> Self {
        self.balance_sheet_total_millions = Some(total);
        self
    }

    /// Sets the detected legal form.
    #[must_use]
    pub fn with_legal_form(mut self, legal_form: impl Into<String>) -> Self {
        self.legal_form = legal_form.into();
        self
    }

    /// Sets the publication date, formatted as `%Y-%m-%d`.
    #[must_use]
    pub fn with_publication_date(mut self, date: NaiveDate) -> Self {
        self.publication_date = date.format("%Y-%m-%d").to_string();
        self
    }
}
