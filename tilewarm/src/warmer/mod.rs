//! Tile-pyramid cache warmer.
//!
//! The [`Warmer`] visits every tile of a bounded region between two zoom
//! levels and requests each configured filename from the backend so the
//! server computes and caches them ahead of live traffic.
//!
//! # Traversal
//!
//! The run starts from the smallest tile covering the region at the
//! minimum zoom level and descends the quadtree breadth-first: each
//! dequeued tile is fetched (all filenames concurrently), then its four
//! children are enqueued if they overlap the region in area, until the
//! maximum zoom level is reached. Tiles are processed strictly one at a
//! time in FIFO order, so every tile's parent is warmed before it.
//!
//! A warmer drives exactly one run: construct, [`initialize`](Warmer::initialize),
//! [`warm`](Warmer::warm), discard. Any fetch failure aborts the run.
//!
//! # Example
//!
//! ```ignore
//! let warmer = Warmer::new(config, backend, ConsoleProgress::new())?;
//! warmer.initialize().await?;
//! let processed = warmer.warm().await?;
//! println!("warmed {} tiles", processed.len());
//! ```

mod config;
mod error;

pub use config::WarmerConfig;
pub use error::WarmerError;

use std::collections::VecDeque;

use futures::future;
use geo::Polygon;
use tracing::{debug, info};

use crate::backend::TileBackend;
use crate::coord::{self, TileCoord};
use crate::geom;
use crate::progress::{ProgressReporter, TileProgress};

/// One-shot cache warmer for a region of the tile pyramid.
pub struct Warmer<B: TileBackend, P: ProgressReporter> {
    backend: B,
    progress: P,
    layer_name: String,
    filenames: Vec<String>,
    max_zoom: u8,
    region: Polygon<f64>,
    queue: VecDeque<TileCoord>,
    processed: Vec<TileCoord>,
}

impl<B: TileBackend, P: ProgressReporter> Warmer<B, P> {
    /// Create a warmer for the given configuration.
    ///
    /// Validates the region and zoom bounds, computes the starting tile
    /// (the smallest tile covering the region, walked up to `min_zoom`),
    /// and seeds the work queue with it. The starting tile can sit above
    /// `min_zoom` when the region straddles a tile boundary; it is never
    /// pushed below it.
    pub fn new(config: WarmerConfig, backend: B, progress: P) -> Result<Self, WarmerError> {
        config.validate()?;

        let mut start = coord::bbox_to_tile(&config.bbox);
        while start.zoom > config.min_zoom {
            let Some(up) = start.parent() else { break };
            start = up;
        }

        debug!(
            x = start.x,
            y = start.y,
            zoom = start.zoom,
            "Computed starting tile"
        );

        Ok(Self {
            backend,
            progress,
            layer_name: config.layer_name,
            filenames: config.filenames,
            max_zoom: config.max_zoom,
            region: config.bbox.to_polygon(),
            queue: VecDeque::from([start]),
            processed: Vec::new(),
        })
    }

    /// Initialize the tile backend.
    ///
    /// Must complete before [`warm`](Warmer::warm); a failure here is
    /// fatal for the run.
    pub async fn initialize(&self) -> Result<(), WarmerError> {
        info!(backend = self.backend.name(), "Initializing tile backend");
        self.backend
            .initialize()
            .await
            .map_err(WarmerError::BackendInit)
    }

    /// Run the full pyramid traversal to completion.
    ///
    /// Returns the tiles warmed, in processing order. On any fetch
    /// failure the run aborts immediately and the error propagates; the
    /// progress reporter is stopped on both paths.
    pub async fn warm(mut self) -> Result<Vec<TileCoord>, WarmerError> {
        info!(
            layer = %self.layer_name,
            filenames = self.filenames.len(),
            max_zoom = self.max_zoom,
            "Starting warming run"
        );

        self.progress.start(self.queue.len() as u64);
        let result = self.drain_queue().await;
        self.progress.stop();

        result?;
        info!(tiles = self.processed.len(), "Warming run complete");
        Ok(self.processed)
    }

    /// Process queued tiles until none remain.
    async fn drain_queue(&mut self) -> Result<(), WarmerError> {
        while let Some(tile) = self.queue.pop_front() {
            self.progress.increment(
                1,
                &TileProgress {
                    layer: &self.layer_name,
                    x: tile.x,
                    y: tile.y,
                    zoom: tile.zoom,
                },
            );

            self.warm_tile(&tile).await?;
            self.processed.push(tile);

            // Tiles at max zoom are fetched but never expanded
            if tile.zoom >= self.max_zoom {
                continue;
            }

            for child in tile.children() {
                let child_polygon = child.bounds().to_polygon();
                if geom::overlaps(&child_polygon, &self.region) {
                    self.queue.push_back(child);
                }
            }

            self.progress
                .set_total((self.queue.len() + self.processed.len()) as u64);
        }
        Ok(())
    }

    /// Warm a single tile: request every configured filename, concurrently.
    ///
    /// All-or-nothing: the first failed fetch aborts the step and the
    /// tile is not recorded as processed.
    async fn warm_tile(&self, tile: &TileCoord) -> Result<(), WarmerError> {
        debug!(x = tile.x, y = tile.y, zoom = tile.zoom, "Warming tile");

        let fetches = self.filenames.iter().map(|filename| async move {
            self.backend
                .fetch_tile(&self.layer_name, filename, tile.x, tile.y, tile.zoom)
                .await
                .map_err(|source| WarmerError::Fetch {
                    layer: self.layer_name.clone(),
                    filename: filename.clone(),
                    x: tile.x,
                    y: tile.y,
                    zoom: tile.zoom,
                    source,
                })
        });

        future::try_join_all(fetches).await?;
        Ok(())
    }
}
