//! Search query value objects

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which catalog field the query text is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match against book titles
    #[default]
    Title,

    /// Match against author names
    Author,
}

impl SearchMode {
    /// Name of the upstream query parameter for this mode
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchMode::Title => "title",
            SearchMode::Author => "author",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for SearchMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(SearchMode::Title),
            "author" => Ok(SearchMode::Author),
            _ => Err(ValidationError::UnknownMode(s.to_string())),
        }
    }
}

/// A validated search request
///
/// The text is trimmed on construction and never blank, so holding a `SearchQuery`
/// means it is safe to send to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    mode: SearchMode,
}

impl SearchQuery {
    /// Create a query, rejecting whitespace-only text
    pub fn new(text: impl AsRef<str>, mode: SearchMode) -> Result<Self, ValidationError> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return Err(ValidationError::BlankQuery);
        }
        Ok(Self {
            text: text.to_string(),
            mode,
        })
    }

    /// Create a title search
    pub fn title(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::new(text, SearchMode::Title)
    }

    /// Create an author search
    pub fn author(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        Self::new(text, SearchMode::Author)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_rejected() {
        assert_eq!(
            SearchQuery::title("   \t\n"),
            Err(ValidationError::BlankQuery)
        );
        assert_eq!(SearchQuery::author(""), Err(ValidationError::BlankQuery));
    }

    #[test]
    fn test_text_is_trimmed() {
        let query = SearchQuery::author("  Ursula K. Le Guin  ").unwrap();
        assert_eq!(query.text(), "Ursula K. Le Guin");
        assert_eq!(query.mode(), SearchMode::Author);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("title".parse::<SearchMode>(), Ok(SearchMode::Title));
        assert_eq!(" AUTHOR ".parse::<SearchMode>(), Ok(SearchMode::Author));
        assert_eq!(
            "isbn".parse::<SearchMode>(),
            Err(ValidationError::UnknownMode("isbn".to_string()))
        );
    }

    #[test]
    fn test_mode_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&SearchMode::Author).unwrap(),
            "\"author\""
        );
        let mode: SearchMode = serde_json::from_str("\"title\"").unwrap();
        assert_eq!(mode, SearchMode::Title);
    }
}
