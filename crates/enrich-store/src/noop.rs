//! No-op store implementation.

use async_trait::async_trait;
use enrich_core::{EnrichedCompany, EnrichedStore, Result};
use tracing::trace;

/// A no-op store that doesn't persist anything.
///
/// `upsert` and `clear` succeed without effect and `get` returns `Ok(None)`.
/// Useful for dry runs where the pipeline should resolve and extract without
/// writing records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl NoopStore {
    /// Create a new no-op store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EnrichedStore for NoopStore {
    async fn upsert(&self, record: &EnrichedCompany) -> Result<()> {
        trace!(
            company_id = record.company_id,
            "NoopStore: upsert called, doing nothing"
        );
        Ok(())
    }

    async fn get(&self, _company_id: i64) -> Result<Option<EnrichedCompany>> {
        trace!("NoopStore: get called, returning None");
        Ok(None)
    }

    async fn clear(&self) -> Result<()> {
        trace!("NoopStore: clear called, doing nothing");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_store_drops_records() {
        let store = NoopStore::new();
        let record = EnrichedCompany::new(1, "bundesanzeiger").with_revenue(4.2);

        assert!(store.upsert(&record).await.is_ok());
        assert!(store.get(1).await.unwrap().is_none());
        assert!(store.clear().await.is_ok());
    }

    #[test]
    fn test_noop_store_is_copy() {
        let store1 = NoopStore::new();
        let store2 = store1; // Copy
        let _store3 = store2; // Still works because Copy
    }
}
