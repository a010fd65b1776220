//! Tile coordinate type definitions

use std::f64::consts::PI;
use std::fmt;

use crate::geom::BBox;

/// Maximum zoom level accepted for warming runs.
pub const MAX_ZOOM: u8 = 24;

/// Tile coordinates in the standard XYZ / Slippy Map quadtree scheme.
///
/// `x` grows eastward from the antimeridian, `y` grows southward from the
/// north pole. Invariant: `0 <= x, y < 2^zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (east-west), 0 at west
    pub x: u32,
    /// Y coordinate (north-south), 0 at north
    pub y: u32,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoord {
    /// Create a tile coordinate.
    pub fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// The tile one zoom level up that contains this tile.
    ///
    /// Returns `None` for the root tile.
    pub fn parent(&self) -> Option<TileCoord> {
        if self.zoom == 0 {
            return None;
        }
        Some(TileCoord {
            x: self.x >> 1,
            y: self.y >> 1,
            zoom: self.zoom - 1,
        })
    }

    /// The four quadtree children of this tile at the next zoom level.
    ///
    /// Children are yielded in the order north-west, north-east,
    /// south-east, south-west.
    pub fn children(&self) -> [TileCoord; 4] {
        let x = self.x * 2;
        let y = self.y * 2;
        let zoom = self.zoom + 1;
        [
            TileCoord { x, y, zoom },
            TileCoord { x: x + 1, y, zoom },
            TileCoord {
                x: x + 1,
                y: y + 1,
                zoom,
            },
            TileCoord { x, y: y + 1, zoom },
        ]
    }

    /// Geographic bounds of this tile (inverse Web Mercator).
    pub fn bounds(&self) -> BBox {
        let n = 2.0_f64.powi(self.zoom as i32);
        let west = self.x as f64 / n * 360.0 - 180.0;
        let east = (self.x as f64 + 1.0) / n * 360.0 - 180.0;
        let north = tile_edge_to_lat(self.y as f64, n);
        let south = tile_edge_to_lat(self.y as f64 + 1.0, n);
        BBox {
            west,
            south,
            east,
            north,
        }
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Latitude of a horizontal tile edge at fractional row `y` of `n` rows.
fn tile_edge_to_lat(y: f64, n: f64) -> f64 {
    (PI * (1.0 - 2.0 * y / n)).sinh().atan().to_degrees()
}
