//! Error types for Bookscout Core

use thiserror::Error;

/// Message shown when the search text is blank
pub const INVALID_QUERY_MESSAGE: &str = "Please enter a valid search query.";

/// Message shown for every transport or parse failure during a search
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch books. Please check your network connection or try again.";

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CatalogError {
    /// The message a user should see for this failure.
    ///
    /// Validation failures keep their own message; transport and parse failures are not
    /// distinguished and share the generic fetch message.
    pub fn user_message(&self) -> &'static str {
        match self {
            CatalogError::Validation(_) => INVALID_QUERY_MESSAGE,
            _ => FETCH_FAILED_MESSAGE,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation(_))
    }
}

/// Input rejected before any network call is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("search text is blank")]
    BlankQuery,

    #[error("ISBN is blank")]
    BlankIsbn,

    #[error("unknown search mode: {0} (expected 'title' or 'author')")]
    UnknownMode(String),
}

/// Errors that occur while talking to the catalog
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

/// Errors that occur while decoding catalog responses
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

/// Errors in catalog configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
}
