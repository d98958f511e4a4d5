//! The observable state of a search

use super::BookSummary;
use serde::{Deserialize, Serialize};

/// Exactly one of these is shown at a time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SearchOutcome {
    /// Nothing searched yet
    #[default]
    Idle,

    /// A request is in flight
    Loading,

    /// The search failed; `message` is user-facing
    Error { message: String },

    /// The catalog returned no hits
    Empty,

    /// Normalized hits in upstream order
    Results { books: Vec<BookSummary> },
}

impl SearchOutcome {
    pub fn error(message: impl Into<String>) -> Self {
        SearchOutcome::Error {
            message: message.into(),
        }
    }

    /// `Empty` for no books, `Results` otherwise
    pub fn from_books(books: Vec<BookSummary>) -> Self {
        if books.is_empty() {
            SearchOutcome::Empty
        } else {
            SearchOutcome::Results { books }
        }
    }

    /// Books to render; empty for every state but `Results`
    pub fn books(&self) -> &[BookSummary] {
        match self {
            SearchOutcome::Results { books } => books,
            _ => &[],
        }
    }

    /// Text shown in place of a result list
    pub fn notice(&self) -> Option<&str> {
        match self {
            SearchOutcome::Idle => Some("Start by searching for books using the search bar above."),
            SearchOutcome::Loading => Some("Loading..."),
            SearchOutcome::Error { message } => Some(message.as_str()),
            SearchOutcome::Empty => {
                Some("No books found for your search query. Try a different keyword.")
            }
            SearchOutcome::Results { .. } => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchOutcome::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SearchOutcome::Error { .. })
    }

    /// Whether the search has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SearchOutcome::Error { .. } | SearchOutcome::Empty | SearchOutcome::Results { .. }
        )
    }
}
