//! Network boundary for catalog requests

use crate::config::CatalogConfig;
use crate::error::TransportError;
use async_trait::async_trait;

/// Result type for transport operations
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Status and raw body of one catalog response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl CatalogResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract catalog transport
///
/// One call is one outbound GET. Implementations must not retry.
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    /// Fetch the given URL
    async fn get(&self, url: &str) -> TransportResult<CatalogResponse>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport honoring the configured timeout
    pub fn new(config: &CatalogConfig) -> TransportResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("bookscout/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn request_error(url: &str, err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else {
        TransportError::Request {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl CatalogTransport for HttpTransport {
    async fn get(&self, url: &str) -> TransportResult<CatalogResponse> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| request_error(url, e))?;

        tracing::debug!("{} -> {} ({} bytes)", url, status, body.len());
        Ok(CatalogResponse::new(status, body.to_vec()))
    }
}
