//! TileWarm - cache warmer for XYZ map-tile servers
//!
//! This library pre-populates a tile server's cache by walking the tile
//! pyramid over a bounded geographic region: starting from the smallest
//! tile covering the region at the minimum zoom level, it descends the
//! quadtree level by level, pruning children that fall outside the
//! region, and requests every configured filename for each visited tile.
//!
//! # High-Level API
//!
//! ```ignore
//! use tilewarm::backend::HttpTileBackend;
//! use tilewarm::geom::BBox;
//! use tilewarm::progress::ConsoleProgress;
//! use tilewarm::warmer::{Warmer, WarmerConfig};
//!
//! let config = WarmerConfig {
//!     bbox: BBox { west: -74.03, south: 40.69, east: -73.96, north: 40.75 },
//!     layer_name: "basemap".to_string(),
//!     filenames: vec!["tile.png".to_string()],
//!     min_zoom: 10,
//!     max_zoom: 14,
//! };
//!
//! let backend = HttpTileBackend::new("http://localhost:8080");
//! let warmer = Warmer::new(config, backend, ConsoleProgress::new())?;
//! warmer.initialize().await?;
//! let processed = warmer.warm().await?;
//! ```

pub mod backend;
pub mod coord;
pub mod geom;
pub mod logging;
pub mod progress;
pub mod warmer;

/// Version of the TileWarm library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
