//! Per-book detail lookup types

use super::CoverSize;
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Book identifier used as the key for detail lookups
///
/// Surrounding whitespace and interior hyphens or spaces are removed, so
/// `"0-451-52653-8"` and `"0451526538"` name the same book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let isbn: String = raw
            .trim()
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        if isbn.is_empty() {
            return Err(ValidationError::BlankIsbn);
        }
        Ok(Self(isbn))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key the per-book endpoint uses for this ISBN (`ISBN:<isbn>`)
    pub fn bibkey(&self) -> String {
        format!("ISBN:{}", self.0)
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Isbn {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Whatever the per-book endpoint returned for one ISBN
///
/// The record is passed through untouched. The accessors below only read
/// well-known fields and return nothing when a field is missing or has another shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookDetailRecord(Value);

impl BookDetailRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.str_field("subtitle")
    }

    pub fn publish_date(&self) -> Option<&str> {
        self.str_field("publish_date")
    }

    pub fn url(&self) -> Option<&str> {
        self.str_field("url")
    }

    pub fn number_of_pages(&self) -> Option<u64> {
        self.0.get("number_of_pages").and_then(Value::as_u64)
    }

    /// Author names in listed order
    pub fn authors(&self) -> Vec<&str> {
        self.names("authors")
    }

    /// Publisher names in listed order
    pub fn publishers(&self) -> Vec<&str> {
        self.names("publishers")
    }

    /// Cover image of the given size, if the record has one
    pub fn cover_url(&self, size: CoverSize) -> Option<&str> {
        let key = match size {
            CoverSize::Small => "small",
            CoverSize::Medium => "medium",
            CoverSize::Large => "large",
        };
        self.0.get("cover")?.get(key)?.as_str()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn names(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("name").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}
