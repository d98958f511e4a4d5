//! Per-ISBN lookups against the catalog books endpoint

use super::{detail_url, Catalog};
use crate::error::Result;
use crate::types::{BookDetailRecord, Isbn};
use serde_json::{Map, Value};

impl Catalog {
    /// Look up one book by ISBN
    ///
    /// `Ok(None)` means the catalog answered but has no record for the key; failures
    /// (blank ISBN, transport, malformed JSON) come back as `Err`.
    pub async fn resolve(&self, isbn: &str) -> Result<Option<BookDetailRecord>> {
        let isbn = Isbn::parse(isbn)?;
        self.lookup(&isbn).await
    }

    /// Look up one book by ISBN, logging and discarding any failure
    pub async fn resolve_or_none(&self, isbn: &str) -> Option<BookDetailRecord> {
        match self.resolve(isbn).await {
            Ok(record) => record,
            Err(e) => {
                tracing::error!("Error fetching book details for {:?}: {}", isbn, e);
                None
            }
        }
    }

    /// Look up a validated ISBN
    pub async fn lookup(&self, isbn: &Isbn) -> Result<Option<BookDetailRecord>> {
        let url = detail_url(self.config(), isbn);
        let mut records: Map<String, Value> = self.fetch_json(&url).await?;

        let record = match records.remove(&isbn.bibkey()) {
            None | Some(Value::Null) => None,
            Some(value) => Some(BookDetailRecord::new(value)),
        };

        if record.is_none() {
            tracing::debug!("No record for {}", isbn.bibkey());
        }
        Ok(record)
    }
}
