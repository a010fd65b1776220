//! Tile backend abstraction layer.
//!
//! The warmer consumes tile servers through the [`TileBackend`] trait so
//! the real HTTP server can be swapped for in-memory doubles in tests.
//! [`HttpTileBackend`] is the production implementation.

mod http;
mod types;

pub use http::HttpTileBackend;
pub use types::{BackendError, TileBackend};
