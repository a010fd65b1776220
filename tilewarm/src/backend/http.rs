//! HTTP tile backend for tilestrata-style servers.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, trace};

use super::types::{BackendError, TileBackend};

/// Default HTTP request timeout (30 seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP-based implementation of [`TileBackend`].
///
/// Targets servers exposing the tilestrata URL layout
/// `{base}/{layer}/{z}/{x}/{y}/{filename}`, with a `GET /health`
/// endpoint used by [`initialize`](TileBackend::initialize).
///
/// # Example
///
/// ```ignore
/// use tilewarm::backend::{HttpTileBackend, TileBackend};
///
/// let backend = HttpTileBackend::new("http://localhost:8080");
/// backend.initialize().await?;
/// let data = backend.fetch_tile("basemap", "tile.png", 19295, 24640, 16).await?;
/// ```
#[derive(Clone)]
pub struct HttpTileBackend {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl std::fmt::Debug for HttpTileBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTileBackend")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpTileBackend {
    /// Create a backend for the given server base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a backend with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tilewarm/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// URL of one tile artifact.
    fn tile_url(&self, layer: &str, filename: &str, x: u32, y: u32, zoom: u8) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}",
            self.base_url, layer, zoom, x, y, filename
        )
    }

    /// Fetch a URL, mapping transport and status failures.
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, BackendError> {
        trace!(url = url, "GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    url: url.to_string(),
                    timeout_secs: self.timeout.as_secs(),
                }
            } else {
                BackendError::Http {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| BackendError::Http {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(bytes.to_vec())
    }
}

impl TileBackend for HttpTileBackend {
    async fn initialize(&self) -> Result<(), BackendError> {
        let url = format!("{}/health", self.base_url);
        debug!(url = %url, "Checking tile server health");

        self.fetch_bytes(&url)
            .await
            .map_err(|e| BackendError::InitFailed(e.to_string()))?;
        Ok(())
    }

    async fn fetch_tile(
        &self,
        layer: &str,
        filename: &str,
        x: u32,
        y: u32,
        zoom: u8,
    ) -> Result<Vec<u8>, BackendError> {
        let url = self.tile_url(layer, filename, x, y, zoom);
        self.fetch_bytes(&url).await
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_url_layout() {
        let backend = HttpTileBackend::new("http://localhost:8080");
        assert_eq!(
            backend.tile_url("basemap", "tile.png", 19295, 24640, 16),
            "http://localhost:8080/basemap/16/19295/24640/tile.png"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let backend = HttpTileBackend::new("http://localhost:8080/");
        assert_eq!(
            backend.tile_url("basemap", "tile.png", 0, 0, 0),
            "http://localhost:8080/basemap/0/0/0/tile.png"
        );
    }

    #[test]
    fn test_name() {
        let backend = HttpTileBackend::new("http://localhost:8080");
        assert_eq!(backend.name(), "http");
    }
}
