//! In-memory store implementation.

use async_trait::async_trait;
use enrich_core::{CompanyDirectory, EnrichedCompany, EnrichedStore, RawCompany, Result};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Simple in-memory store for testing and development.
///
/// Enriched records live in a `RwLock`-protected `HashMap` keyed by company
/// id and are lost when the store is dropped. The directory side serves a
/// fixed company list supplied at construction.
#[derive(Debug, Default)]
pub struct MemoryStore {
    companies: Vec<RawCompany>,
    records: RwLock<HashMap<i64, EnrichedCompany>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose directory serves the given companies.
    #[must_use]
    pub fn with_companies(companies: Vec<RawCompany>) -> Self {
        Self {
            companies,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of enriched records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no enriched records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl EnrichedStore for MemoryStore {
    #[instrument(skip(self, record), fields(company_id = record.company_id))]
    async fn upsert(&self, record: &EnrichedCompany) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(record.company_id, record.clone());
        debug!("Upserted enriched record");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, company_id: i64) -> Result<Option<EnrichedCompany>> {
        let records = self.records.read().await;
        Ok(records.get(&company_id).cloned())
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        self.records.write().await.clear();
        debug!("Cleared all enriched records");
        Ok(())
    }
}

#[async_trait]
impl CompanyDirectory for MemoryStore {
    async fn list_companies(&self) -> Result<Vec<RawCompany>> {
        Ok(self.companies.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<RawCompany>> {
        Ok(self.companies.iter().find(|c| c.name == name).cloned())
    }
}
