//! Progress reporting for warming runs.
//!
//! Progress is a side-channel observer, not part of the traversal's
//! correctness: the warmer drives a [`ProgressReporter`] and tests can
//! substitute a recording implementation to assert call sequences.

use indicatif::{ProgressBar, ProgressStyle};

/// Per-tile metadata attached to a progress step.
#[derive(Debug, Clone, Copy)]
pub struct TileProgress<'a> {
    /// Layer being warmed
    pub layer: &'a str,
    /// Tile X coordinate
    pub x: u32,
    /// Tile Y coordinate
    pub y: u32,
    /// Tile zoom level
    pub zoom: u8,
}

/// Observer driven by the warmer as the traversal advances.
///
/// Call sequence for a run: one `start`, then per tile one `increment`
/// followed by at most one `set_total` (the total grows as children are
/// enqueued), then one `stop`. `stop` is called on both the success and
/// the failure path.
pub trait ProgressReporter: Send {
    /// A run is starting with `total` tiles currently known.
    fn start(&mut self, total: u64);

    /// `delta` tiles have begun processing; `tile` identifies the latest.
    fn increment(&mut self, delta: u64, tile: &TileProgress<'_>);

    /// The known tile count changed (children were enqueued).
    fn set_total(&mut self, total: u64);

    /// The run is over; release any display resources.
    fn stop(&mut self);
}

/// Reporter that ignores all progress updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn start(&mut self, _total: u64) {}
    fn increment(&mut self, _delta: u64, _tile: &TileProgress<'_>) {}
    fn set_total(&mut self, _total: u64) {}
    fn stop(&mut self) {}
}

/// Terminal progress bar.
///
/// Renders `{bar} {percent}% | {pos}/{total} | layer/x/y/z` for the tile
/// most recently dequeued.
#[derive(Debug)]
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    /// Create a reporter whose bar appears on the first `start` call.
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleProgress {
    fn start(&mut self, total: u64) {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {percent:>3}% | {pos}/{len} | {msg}")
                .expect("progress bar template is valid"),
        );
        self.bar = bar;
    }

    fn increment(&mut self, delta: u64, tile: &TileProgress<'_>) {
        self.bar.set_message(format!(
            "layer: {} x: {} y: {} z: {}",
            tile.layer, tile.x, tile.y, tile.zoom
        ));
        self.bar.inc(delta);
    }

    fn set_total(&mut self, total: u64) {
        self.bar.set_length(total);
    }

    fn stop(&mut self) {
        self.bar.finish_and_clear();
    }
}
