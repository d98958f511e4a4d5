//! Bookscout Core Library
//!
//! This crate provides the data model and catalog client for the Bookscout book search tool.
//! A raw user query is turned into a normalized list of [`BookSummary`] values (or a typed
//! [`SearchOutcome`]), and an ISBN is resolved into an opaque [`BookDetailRecord`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod session;
pub mod transport;
pub mod types;

pub use catalog::Catalog;
pub use config::CatalogConfig;
pub use error::{
    CatalogError, ConfigError, ParseError, Result, TransportError, ValidationError,
    FETCH_FAILED_MESSAGE, INVALID_QUERY_MESSAGE,
};
pub use session::{SearchSession, SessionSnapshot, Ticket};
pub use transport::{CatalogResponse, CatalogTransport, HttpTransport};
pub use types::{
    BookDetailRecord, BookSummary, CoverSize, Isbn, SearchHit, SearchMode, SearchOutcome,
    SearchQuery, SearchResponse,
};
