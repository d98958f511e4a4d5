//! Query execution against the catalog search endpoint

use super::{search_url, Catalog};
use crate::error::{Result, INVALID_QUERY_MESSAGE};
use crate::types::{BookSummary, SearchMode, SearchOutcome, SearchQuery, SearchResponse};

impl Catalog {
    /// Search from raw user input
    ///
    /// Blank text yields the validation error outcome without touching the network.
    pub async fn search(&self, text: &str, mode: SearchMode) -> SearchOutcome {
        match SearchQuery::new(text, mode) {
            Ok(query) => self.execute(&query).await,
            Err(_) => SearchOutcome::error(INVALID_QUERY_MESSAGE),
        }
    }

    /// Run a validated query and fold the result into a displayable outcome
    pub async fn execute(&self, query: &SearchQuery) -> SearchOutcome {
        match self.find_books(query).await {
            Ok(books) => SearchOutcome::from_books(books),
            Err(e) => {
                tracing::warn!("Search for {:?} by {} failed: {}", query.text(), query.mode(), e);
                SearchOutcome::error(e.user_message())
            }
        }
    }

    /// Run a validated query and return the normalized hits, or the typed failure
    pub async fn find_books(&self, query: &SearchQuery) -> Result<Vec<BookSummary>> {
        let url = search_url(self.config(), query);
        let response: SearchResponse = self.fetch_json(&url).await?;

        tracing::debug!("{} hits for {:?}", response.docs.len(), query.text());

        let books = response
            .docs
            .into_iter()
            .map(|hit| BookSummary::from_hit(hit, self.config()))
            .collect();
        Ok(books)
    }
}
