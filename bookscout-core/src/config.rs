//! Catalog endpoint configuration

use crate::error::ConfigError;
use std::time::Duration;

/// Open Library search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Open Library per-book endpoint
pub const DEFAULT_BOOKS_URL: &str = "https://openlibrary.org/api/books";

/// Open Library covers host
pub const DEFAULT_COVER_BASE_URL: &str = "https://covers.openlibrary.org";

/// Image shown for hits without a cover identifier
pub const DEFAULT_PLACEHOLDER_COVER_URL: &str = "https://via.placeholder.com/150";

/// Request timeout applied by [`crate::HttpTransport`] unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable naming a catalog origin (e.g. a local mirror)
pub const ENV_CATALOG_URL: &str = "BOOKSCOUT_CATALOG_URL";

/// Environment variable naming the covers host
pub const ENV_COVERS_URL: &str = "BOOKSCOUT_COVERS_URL";

/// Environment variable holding the request timeout in seconds (0 disables it)
pub const ENV_TIMEOUT_SECS: &str = "BOOKSCOUT_TIMEOUT_SECS";

/// Where the catalog lives and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Search endpoint, queried as `<search_url>?title=...` or `?author=...`
    pub search_url: String,

    /// Per-book endpoint, queried with `bibkeys=ISBN:<isbn>`
    pub books_url: String,

    /// Covers host, images live under `<cover_base_url>/b/id/`
    pub cover_base_url: String,

    /// Fallback image for hits without a cover
    pub placeholder_cover_url: String,

    /// Request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            books_url: DEFAULT_BOOKS_URL.to_string(),
            cover_base_url: DEFAULT_COVER_BASE_URL.to_string(),
            placeholder_cover_url: DEFAULT_PLACEHOLDER_COVER_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl CatalogConfig {
    /// Point both catalog endpoints at another origin that serves the Open Library layout
    pub fn with_catalog_origin(mut self, origin: impl AsRef<str>) -> Self {
        let origin = origin.as_ref().trim_end_matches('/');
        self.search_url = format!("{}/search.json", origin);
        self.books_url = format!("{}/api/books", origin);
        self
    }

    /// Set the covers host
    pub fn with_cover_base_url(mut self, base: impl AsRef<str>) -> Self {
        self.cover_base_url = base.as_ref().trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout (`None` disables it)
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build a configuration from `BOOKSCOUT_*` environment variables over the defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup over the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(origin) = lookup(ENV_CATALOG_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_catalog_origin(origin.trim());
        }

        if let Some(covers) = lookup(ENV_COVERS_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_cover_base_url(covers.trim());
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_TIMEOUT_SECS.to_string(),
                    value: raw.clone(),
                })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_point_at_open_library() {
        let config = CatalogConfig::default();
        assert_eq!(config.search_url, "https://openlibrary.org/search.json");
        assert_eq!(config.books_url, "https://openlibrary.org/api/books");
        assert_eq!(config.cover_base_url, "https://covers.openlibrary.org");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_catalog_origin_strips_trailing_slash() {
        let config = CatalogConfig::default().with_catalog_origin("http://127.0.0.1:8080/");
        assert_eq!(config.search_url, "http://127.0.0.1:8080/search.json");
        assert_eq!(config.books_url, "http://127.0.0.1:8080/api/books");
    }

    #[test]
    fn test_from_lookup_empty_is_default() {
        let config = CatalogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (ENV_CATALOG_URL, "http://mirror.local"),
            (ENV_COVERS_URL, "http://covers.local/"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();

        assert_eq!(config.search_url, "http://mirror.local/search.json");
        assert_eq!(config.cover_base_url, "http://covers.local");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config = CatalogConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")])).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = CatalogConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_TIMEOUT_SECS.to_string(),
                value: "soon".to_string(),
            }
        );
    }
}
