//! SQLite-backed store implementation.

use async_trait::async_trait;
use chrono::Utc;
use enrich_core::{
    CompanyDirectory, EnrichError, EnrichedCompany, EnrichedStore, RawCompany, Result,
};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, instrument};

/// SQLite-backed store for raw companies and their enriched records.
///
/// Holds both sides of the pipeline in one database file: the raw company
/// listing produced by the collection side and the enriched records written
/// back per company. Implements [`CompanyDirectory`] for the former and
/// [`EnrichedStore`] for the latter.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new SQLite store at the given path.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or schema creation fails.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| EnrichError::Store(e.to_string()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create an in-memory SQLite store.
    ///
    /// Useful for testing; data is lost when the store is dropped.
    ///
    /// # Errors
    /// Returns an error if schema creation fails.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| EnrichError::Store(e.to_string()))?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema.
    fn initialize_schema(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        // Raw company listing, written by the collection side
        conn.execute(
            "CREATE TABLE IF NOT EXISTS raw_companies (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                url TEXT NOT NULL DEFAULT '',
                address TEXT NOT NULL DEFAULT '',
                UNIQUE(name, address)
            )",
            [],
        )
        .map_err(|e| EnrichError::Store(e.to_string()))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_raw_companies_name
             ON raw_companies(name)",
            [],
        )
        .map_err(|e| EnrichError::Store(e.to_string()))?;

        // Enriched records, one live row per company
        conn.execute(
            "CREATE TABLE IF NOT EXISTS enriched_companies (
                company_id INTEGER PRIMARY KEY,
                source TEXT NOT NULL,
                url TEXT NOT NULL,
                revenue_millions REAL,
                employee_count_min INTEGER,
                balance_sheet_total_millions REAL,
                legal_form TEXT NOT NULL,
                publication_date TEXT NOT NULL,
                confidence_score REAL NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| EnrichError::Store(e.to_string()))?;

        debug!("SQLite store schema initialized");
        Ok(())
    }

    /// Insert a raw company, or return the existing id when the same
    /// `(name, address)` pair was inserted before.
    ///
    /// This is the seeding side of the store: the collection process calls it
    /// once per scraped company, and re-running collection is harmless.
    ///
    /// # Errors
    /// Returns an error if the insert or the id lookup fails.
    #[instrument(skip(self), fields(name = %name))]
    pub fn insert_company(&self, name: &str, url: &str, address: &str) -> Result<i64> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        conn.execute(
            "INSERT OR IGNORE INTO raw_companies (name, url, address) VALUES (?1, ?2, ?3)",
            params![name, url, address],
        )
        .map_err(|e| EnrichError::Store(e.to_string()))?;

        // last_insert_rowid is stale when the insert was ignored, so look the
        // id up by the unique key instead
        let id = conn
            .query_row(
                "SELECT id FROM raw_companies WHERE name = ?1 AND address = ?2",
                params![name, address],
                |row| row.get::<_, i64>(0),
            )
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        debug!(id, "Company registered");
        Ok(id)
    }
}

#[async_trait]
impl EnrichedStore for SqliteStore {
    #[instrument(skip(self, record), fields(company_id = record.company_id))]
    async fn upsert(&self, record: &EnrichedCompany) -> Result<()> {
        let now = Utc::now().to_rfc3339();

        let conn = self
            .conn
            .lock()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        conn.execute(
            "INSERT INTO enriched_companies
             (company_id, source, url, revenue_millions, employee_count_min,
              balance_sheet_total_millions, legal_form, publication_date,
              confidence_score, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
             ON CONFLICT(company_id) DO UPDATE SET
                source = excluded.source,
                url = excluded.url,
                revenue_millions = excluded.revenue_millions,
                employee_count_min = excluded.employee_count_min,
                balance_sheet_total_millions = excluded.balance_sheet_total_millions,
                legal_form = excluded.legal_form,
                publication_date = excluded.publication_date,
                confidence_score = excluded.confidence_score,
                updated_at = excluded.updated_at",
            params![
                record.company_id,
                record.source,
                record.url,
                record.revenue_millions,
                record.employee_count_min,
                record.balance_sheet_total_millions,
                record.legal_form,
                record.publication_date,
                record.confidence_score,
                now,
                now
            ],
        )
        .map_err(|e| EnrichError::Store(e.to_string()))?;

        debug!("Upserted enriched record");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, company_id: i64) -> Result<Option<EnrichedCompany>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        let record = conn
            .query_row(
                "SELECT source, url, revenue_millions, employee_count_min,
                        balance_sheet_total_millions, legal_form, publication_date,
                        confidence_score
                 FROM enriched_companies WHERE company_id = ?1",
                params![company_id],
                |row| {
                    Ok(EnrichedCompany {
                        company_id,
                        source: row.get(0)?,
                        url: row.get(1)?,
                        revenue_millions: row.get(2)?,
                        employee_count_min: row.get(3)?,
                        balance_sheet_total_millions: row.get(4)?,
                        legal_form: row.get(5)?,
                        publication_date: row.get(6)?,
                        confidence_score: row.get(7)?,
                    })
                },
            )
            .optional()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        match &record {
            Some(_) => debug!("Found enriched record"),
            None => debug!("No enriched record"),
        }
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        conn.execute("DELETE FROM enriched_companies", [])
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        debug!("Cleared all enriched records");
        Ok(())
    }
}

#[async_trait]
impl CompanyDirectory for SqliteStore {
    #[instrument(skip(self))]
    async fn list_companies(&self) -> Result<Vec<RawCompany>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        let mut stmt = conn
            .prepare("SELECT id, name, url FROM raw_companies ORDER BY id ASC")
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RawCompany {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    url: row.get(2)?,
                })
            })
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        let mut companies = Vec::new();
        for row in rows {
            companies.push(row.map_err(|e| EnrichError::Store(e.to_string()))?);
        }

        debug!("Listed {} raw companies", companies.len());
        Ok(companies)
    }

    #[instrument(skip(self), fields(name = %name))]
    async fn find_by_name(&self, name: &str) -> Result<Option<RawCompany>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        let company = conn
            .query_row(
                "SELECT id, name, url FROM raw_companies WHERE name = ?1 LIMIT 1",
                params![name],
                |row| {
                    Ok(RawCompany {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        url: row.get(2)?,
                    })
                },
            )
            .optional()
            .map_err(|e| EnrichError::Store(e.to_string()))?;

        Ok(company)
    }
}
