//! Core types for catalog search and detail lookup

mod detail;
mod hit;
mod outcome;
mod query;
mod summary;

pub use detail::{BookDetailRecord, Isbn};
pub use hit::{SearchHit, SearchResponse};
pub use outcome::SearchOutcome;
pub use query::{SearchMode, SearchQuery};
pub use summary::{cover_url, BookSummary, CoverSize, UNKNOWN};
