//! Application state

use anyhow::{Context, Result};
use bookscout_core::{Catalog, CatalogConfig, SearchSession};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Client for the external catalog
    pub catalog: Catalog,

    /// The shared search session shown to every viewer
    pub session: Arc<SearchSession>,
}

impl AppState {
    /// Create state over an existing catalog with a fresh session
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            session: Arc::new(SearchSession::new()),
        }
    }

    /// Create state from `BOOKSCOUT_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = CatalogConfig::from_env().context("Invalid catalog configuration")?;
        tracing::info!(
            "Using catalog {} (timeout: {:?})",
            config.search_url,
            config.timeout
        );
        let catalog = Catalog::new(config).context("Failed to set up catalog client")?;
        Ok(Self::new(catalog))
    }
}
