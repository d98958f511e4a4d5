//! Normalized search result cards

use super::SearchHit;
use crate::config::CatalogConfig;
use serde::{Deserialize, Serialize};

/// Display value for a missing author or publisher
pub const UNKNOWN: &str = "Unknown";

/// Cover image sizes served by the covers host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoverSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CoverSize {
    fn suffix(&self) -> char {
        match self {
            CoverSize::Small => 'S',
            CoverSize::Medium => 'M',
            CoverSize::Large => 'L',
        }
    }
}

/// Build the image URL for a cover identifier
///
/// Missing or non-positive identifiers fall back to the placeholder image.
pub fn cover_url(cover_id: Option<i64>, size: CoverSize, config: &CatalogConfig) -> String {
    match cover_id {
        Some(id) if id > 0 => format!(
            "{}/b/id/{}-{}.jpg",
            config.cover_base_url,
            id,
            size.suffix()
        ),
        _ => config.placeholder_cover_url.clone(),
    }
}

/// Read-only projection of one search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    /// Catalog key, used to navigate to a detail view
    pub id: String,

    /// Medium cover image or the placeholder
    pub cover_url: String,

    pub title: String,

    /// Authors joined with ", ", or "Unknown"
    pub authors: String,

    /// First listed publisher, or "Unknown"
    pub publisher: String,
}

impl BookSummary {
    /// Normalize a raw hit
    pub fn from_hit(hit: SearchHit, config: &CatalogConfig) -> Self {
        let authors = match hit.author_name {
            Some(names) if !names.is_empty() => names.join(", "),
            _ => UNKNOWN.to_string(),
        };

        let publisher = hit
            .publisher
            .and_then(|publishers| publishers.into_iter().next())
            .unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            id: hit.key.unwrap_or_default(),
            cover_url: cover_url(hit.cover_i, CoverSize::Medium, config),
            title: hit.title.unwrap_or_default(),
            authors,
            publisher,
        }
    }
}
