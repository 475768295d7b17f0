//! The pipeline wiring resolution, extraction, and persistence together.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use enrich_core::{
    CompanyDirectory, EnrichError, EnrichedCompany, EnrichedStore, RawCompany, ReportSource,
    Result,
};
use enrich_extract::ReportExtractor;
use enrich_match::{Resolver, VariantGenerator};

/// Outcome counters for a batch run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Companies the batch attempted to enrich.
    pub attempted: usize,
    /// Companies for which an enriched record was written.
    pub enriched: usize,
}

/// Drives enrichment per company: resolve the name against the report
/// source, mine the matched report, and persist the record.
///
/// The pipeline runs sequentially, one company and one lookup at a time,
/// because the registry side throttles aggressive clients. An optional
/// [`delay`](Self::with_delay) adds breathing room between companies on
/// top of the source's own request pacing.
///
/// # Example
///
/// ```rust,ignore
/// use enrich::{EnrichmentPipeline, MemoryStore, ReportExtractor};
/// use std::sync::Arc;
///
/// let pipeline = EnrichmentPipeline::new(source, Arc::new(MemoryStore::new()))
///     .with_extractor(ReportExtractor::extended());
///
/// let summary = pipeline.enrich_batch(&companies).await;
/// println!("{}/{}", summary.enriched, summary.attempted);
/// ```
pub struct EnrichmentPipeline {
    source: Arc<dyn ReportSource>,
    store: Arc<dyn EnrichedStore>,
    resolver: Resolver,
    extractor: ReportExtractor,
    variants: VariantGenerator,
    delay: Option<Duration>,
}

impl std::fmt::Debug for EnrichmentPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentPipeline")
            .field("source", &self.source.name())
            .field("store", &"configured")
            .field("delay", &self.delay)
            .finish()
    }
}

impl EnrichmentPipeline {
    /// Create a pipeline with the baseline extractor and no inter-company
    /// delay.
    #[must_use]
    pub fn new(source: Arc<dyn ReportSource>, store: Arc<dyn EnrichedStore>) -> Self {
        Self {
            source,
            store,
            resolver: Resolver::new(),
            extractor: ReportExtractor::new(),
            variants: VariantGenerator::new(),
            delay: None,
        }
    }

    /// Replace the extractor, e.g. with [`ReportExtractor::extended`].
    #[must_use]
    pub fn with_extractor(mut self, extractor: ReportExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Sleep this long between companies in a batch.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Enrich a single company.
    ///
    /// Returns `Ok(None)` when no disclosure match reaches the acceptance
    /// threshold; nothing is written in that case. On a match the record is
    /// upserted before it is returned, and a store failure propagates.
    pub async fn enrich_company(&self, company: &RawCompany) -> Result<Option<EnrichedCompany>> {
        let Some(candidate) = self
            .resolver
            .resolve(self.source.as_ref(), &company.name)
            .await
        else {
            warn!(company = %company.name, "No acceptable disclosure match, skipping");
            return Ok(None);
        };

        let facts = self.extractor.extract(&candidate.entry.body);
        if facts.is_empty() {
            debug!(company = %company.name, "Matched disclosure yielded no facts");
        }

        let mut record =
            EnrichedCompany::new(company.id, self.source.name()).with_url(&company.url);
        if let Some(revenue) = facts.revenue_millions {
            record = record.with_revenue(revenue);
        }
        if let Some(count) = facts.employee_count {
            record = record.with_employee_count(count);
        }
        if let Some(total) = facts.balance_sheet_total {
            record = record.with_balance_sheet_total(total);
        }
        if let Some(form) = self.variants.legal_form(&company.name) {
            record = record.with_legal_form(form);
        }
        if let Some(date) = candidate.entry.date {
            record = record.with_publication_date(date);
        }

        self.store.upsert(&record).await?;

        info!(
            company = %company.name,
            matched = %candidate.entry.title,
            score = candidate.score,
            revenue_millions = ?record.revenue_millions,
            employee_count_min = ?record.employee_count_min,
            balance_sheet_total_millions = ?record.balance_sheet_total_millions,
            "Company enriched"
        );
        Ok(Some(record))
    }

    /// Enrich a slice of companies sequentially.
    ///
    /// One company's failure never aborts the batch: store errors are logged
    /// and the next company is processed. The summary counts every company
    /// as attempted and only written records as enriched.
    pub async fn enrich_batch(&self, companies: &[RawCompany]) -> BatchSummary {
        let mut summary = BatchSummary::default();

        for (i, company) in companies.iter().enumerate() {
            if i > 0 {
                if let Some(delay) = self.delay {
                    tokio::time::sleep(delay).await;
                }
            }

            summary.attempted += 1;
            match self.enrich_company(company).await {
                Ok(Some(_)) => summary.enriched += 1,
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        company = %company.name,
                        error = %e,
                        "Enrichment failed, continuing with next company"
                    );
                }
            }
        }

        info!(
            attempted = summary.attempted,
            enriched = summary.enriched,
            "Batch finished"
        );
        summary
    }

    /// Enrich the directory's full raw listing, up to `limit` companies.
    ///
    /// # Errors
    /// Returns an error when the directory listing itself fails; per-company
    /// failures are absorbed by the batch.
    pub async fn enrich_all(
        &self,
        directory: &dyn CompanyDirectory,
        limit: Option<usize>,
    ) -> Result<BatchSummary> {
        let mut companies = directory.list_companies().await?;
        if let Some(limit) = limit {
            companies.truncate(limit);
        }
        debug!(count = companies.len(), "Enriching raw company listing");
        Ok(self.enrich_batch(&companies).await)
    }

    /// Enrich one company looked up by its collected name.
    ///
    /// # Errors
    /// Returns [`EnrichError::InvalidParameter`] when the directory does not
    /// know the name.
    pub async fn enrich_by_name(
        &self,
        directory: &dyn CompanyDirectory,
        name: &str,
    ) -> Result<Option<EnrichedCompany>> {
        let Some(company) = directory.find_by_name(name).await? else {
            return Err(EnrichError::InvalidParameter(format!(
                "Unknown company: {name}"
            )));
        };
        self.enrich_company(&company).await
    }
}
