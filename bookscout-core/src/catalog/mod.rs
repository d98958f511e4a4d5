//! Catalog client: search (QueryExecutor) and per-book lookup (DetailResolver)

mod detail;
mod search;
mod urls;

pub use urls::{detail_url, search_url};

use crate::config::CatalogConfig;
use crate::error::{ParseError, Result, TransportError};
use crate::transport::{CatalogTransport, HttpTransport};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Handle to the external catalog
///
/// Cheap to clone; clones share the transport and configuration. Operations hold no
/// mutable state, so any number may run concurrently.
#[derive(Clone)]
pub struct Catalog {
    transport: Arc<dyn CatalogTransport>,
    config: Arc<CatalogConfig>,
}

impl Catalog {
    /// Create a catalog that talks HTTP through reqwest
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a catalog over any transport
    pub fn with_transport(config: CatalogConfig, transport: Arc<dyn CatalogTransport>) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Issue one GET and decode a successful body as JSON
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                url: url.to_string(),
            }
            .into());
        }

        let value = serde_json::from_slice(&response.body).map_err(ParseError::from)?;
        Ok(value)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
