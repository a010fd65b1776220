//! Tile coordinate conversion module
//!
//! Provides conversions between geographic coordinates and XYZ quadtree
//! tile addresses: point-to-tile, the smallest tile covering a bounding
//! box, and parent/child navigation on [`TileCoord`].

mod types;


pub use types::{TileCoord, MAX_ZOOM};

use crate::geom::BBox;

/// Zoom level used as the "native" resolution when locating the smallest
/// covering tile. Tile indices at this level fill the full u32 range.
const NATIVE_ZOOM: u8 = 32;

/// Deepest zoom considered when searching for a common covering tile.
const MAX_COVER_ZOOM: u8 = 28;

/// Converts a geographic point to the tile containing it.
///
/// Longitude wraps across the antimeridian; latitude must already be
/// within the Web Mercator range (the warmer validates regions before
/// calling in here).
pub fn point_to_tile(lon: f64, lat: f64, zoom: u8) -> TileCoord {
    let n = 2.0_f64.powi(zoom as i32);
    let max_index = n - 1.0;

    let x = (n * (lon / 360.0 + 0.5)).rem_euclid(n);

    // Web Mercator projection
    let sin = lat.to_radians().sin();
    let y = n * (0.5 - 0.25 * ((1.0 + sin) / (1.0 - sin)).ln() / std::f64::consts::PI);

    TileCoord {
        x: x.floor().clamp(0.0, max_index) as u32,
        y: y.floor().clamp(0.0, max_index) as u32,
        zoom,
    }
}

/// Computes the smallest tile that covers the entire bounding box.
///
/// Both corners are located at the native resolution, then the deepest
/// zoom at which they share a tile address is found by walking their
/// index bits from the most significant end.
pub fn bbox_to_tile(bbox: &BBox) -> TileCoord {
    let min = point_to_tile(bbox.west, bbox.south, NATIVE_ZOOM);
    let max = point_to_tile(bbox.east, bbox.north, NATIVE_ZOOM);

    let zoom = common_cover_zoom(&min, &max);
    if zoom == 0 {
        return TileCoord::new(0, 0, 0);
    }

    let shift = (NATIVE_ZOOM - zoom) as u32;
    TileCoord::new(min.x >> shift, min.y >> shift, zoom)
}

/// Deepest zoom at which both native-resolution tiles share an address.
fn common_cover_zoom(min: &TileCoord, max: &TileCoord) -> u8 {
    for zoom in 0..MAX_COVER_ZOOM {
        let mask = 1u32 << (NATIVE_ZOOM - zoom - 1) as u32;
        if (min.x & mask) != (max.x & mask) || (min.y & mask) != (max.y & mask) {
            return zoom;
        }
    }
    MAX_COVER_ZOOM
}
