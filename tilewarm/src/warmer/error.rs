//! Error types for the warmer.

use thiserror::Error;

use crate::backend::BackendError;
use crate::geom::RegionError;

/// Errors that can occur while constructing or running a warmer.
///
/// All variants are fatal: the warmer performs no retries and returns no
/// partial results.
#[derive(Debug, Error)]
pub enum WarmerError {
    /// The configured bounding box is degenerate or malformed.
    #[error("Invalid region: {0}")]
    InvalidRegion(#[from] RegionError),

    /// Min zoom exceeds max zoom.
    #[error("Invalid zoom bounds: min zoom {min} exceeds max zoom {max}")]
    InvalidZoomBounds { min: u8, max: u8 },

    /// Max zoom exceeds the supported warming range.
    #[error("Zoom level {zoom} not supported (maximum is {limit})")]
    UnsupportedZoom { zoom: u8, limit: u8 },

    /// Backend setup failed; the run never started.
    #[error("Backend initialization failed: {0}")]
    BackendInit(#[source] BackendError),

    /// A tile artifact fetch failed; the run aborted.
    #[error("Failed to fetch {layer}/{zoom}/{x}/{y}/{filename}: {source}")]
    Fetch {
        layer: String,
        filename: String,
        x: u32,
        y: u32,
        zoom: u8,
        #[source]
        source: BackendError,
    },
}
