//! Backend trait and error types

use std::future::Future;

use thiserror::Error;

/// Errors that can occur while talking to a tile backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Backend setup failed before any tile was requested.
    #[error("Backend initialization failed: {0}")]
    InitFailed(String),

    /// Request exceeded the configured timeout.
    #[error("Request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// Transport-level HTTP failure.
    #[error("HTTP error for {url}: {reason}")]
    Http { url: String, reason: String },

    /// Server answered with a non-success status code.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Capability trait for tile-serving backends.
///
/// The warmer drives a backend through exactly two operations: a one-time
/// [`initialize`](TileBackend::initialize) before the run, and one
/// [`fetch_tile`](TileBackend::fetch_tile) per (tile, filename) pair
/// during the run. Implementations are expected to compute and cache the
/// tile data as a side effect of serving it.
pub trait TileBackend: Send + Sync {
    /// Perform any setup required before tiles can be requested.
    fn initialize(&self) -> impl Future<Output = Result<(), BackendError>> + Send;

    /// Request one named artifact for one tile.
    ///
    /// # Arguments
    ///
    /// * `layer` - Layer name the artifact belongs to
    /// * `filename` - Artifact identifier within the layer
    /// * `x`, `y`, `zoom` - XYZ tile address
    ///
    /// # Returns
    ///
    /// The artifact bytes, or an error.
    fn fetch_tile(
        &self,
        layer: &str,
        filename: &str,
        x: u32,
        y: u32,
        zoom: u8,
    ) -> impl Future<Output = Result<Vec<u8>, BackendError>> + Send;

    /// Returns the backend's name for logging and identification.
    fn name(&self) -> &str;
}
