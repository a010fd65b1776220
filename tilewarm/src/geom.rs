//! Region geometry for tile pruning.
//!
//! Provides the [`BBox`] region type and the area-overlap predicate used
//! to decide whether a candidate tile intersects the warming region.
//!
//! # Overlap Policy
//!
//! A tile is admitted only when it shares **positive area** with the
//! region. A tile whose edge merely touches the region boundary is not
//! admitted: warming it would compute data entirely outside the region.

use geo::{Area, BooleanOps, Coord, Polygon, Rect};
use thiserror::Error;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.05112878;
pub const MAX_LAT: f64 = 85.05112878;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Errors produced by region validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegionError {
    /// A bounding box coordinate is NaN or infinite.
    #[error("Bounding box coordinate is not finite")]
    NonFinite,

    /// West edge is at or east of the east edge (zero-width or inverted).
    #[error("Invalid longitude span: west {west} must be less than east {east}")]
    InvertedLongitude { west: f64, east: f64 },

    /// South edge is at or north of the north edge (zero-height or inverted).
    #[error("Invalid latitude span: south {south} must be less than north {north}")]
    InvertedLatitude { south: f64, north: f64 },

    /// Latitude outside the Web Mercator range.
    #[error("Latitude {0} outside valid range ({MIN_LAT} to {MAX_LAT})")]
    LatitudeOutOfRange(f64),

    /// Longitude outside the valid range.
    #[error("Longitude {0} outside valid range ({MIN_LON} to {MAX_LON})")]
    LongitudeOutOfRange(f64),
}

/// Axis-aligned geographic bounding box (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    /// Western longitude
    pub west: f64,
    /// Southern latitude
    pub south: f64,
    /// Eastern longitude
    pub east: f64,
    /// Northern latitude
    pub north: f64,
}

impl BBox {
    /// Create a bounding box from (west, south, east, north) edges.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Validate the bounding box for use as a warming region.
    ///
    /// Degenerate boxes (zero area, inverted edges, out-of-range or
    /// non-finite coordinates) are rejected here rather than failing
    /// later inside the geometry predicates.
    pub fn validate(&self) -> Result<(), RegionError> {
        for v in [self.west, self.south, self.east, self.north] {
            if !v.is_finite() {
                return Err(RegionError::NonFinite);
            }
        }
        for lon in [self.west, self.east] {
            if !(MIN_LON..=MAX_LON).contains(&lon) {
                return Err(RegionError::LongitudeOutOfRange(lon));
            }
        }
        for lat in [self.south, self.north] {
            if !(MIN_LAT..=MAX_LAT).contains(&lat) {
                return Err(RegionError::LatitudeOutOfRange(lat));
            }
        }
        if self.west >= self.east {
            return Err(RegionError::InvertedLongitude {
                west: self.west,
                east: self.east,
            });
        }
        if self.south >= self.north {
            return Err(RegionError::InvertedLatitude {
                south: self.south,
                north: self.north,
            });
        }
        Ok(())
    }

    /// Build the polygon representation of this box (lon = x, lat = y).
    pub fn to_polygon(&self) -> Polygon<f64> {
        Rect::new(
            Coord {
                x: self.west,
                y: self.south,
            },
            Coord {
                x: self.east,
                y: self.north,
            },
        )
        .to_polygon()
    }
}

/// Test whether two polygons overlap in area.
///
/// Boundary contact without shared interior does not count as overlap.
pub fn overlaps(a: &Polygon<f64>, b: &Polygon<f64>) -> bool {
    a.intersection(b).unsigned_area() > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bbox() {
        let bbox = BBox::new(-74.03, 40.69, -73.96, 40.75);
        assert!(bbox.validate().is_ok());
    }

    #[test]
    fn test_inverted_longitude_rejected() {
        let bbox = BBox::new(10.0, 0.0, -10.0, 5.0);
        assert!(matches!(
            bbox.validate().unwrap_err(),
            RegionError::InvertedLongitude { .. }
        ));
    }

    #[test]
    fn test_inverted_latitude_rejected() {
        let bbox = BBox::new(-10.0, 5.0, 10.0, 0.0);
        assert!(matches!(
            bbox.validate().unwrap_err(),
            RegionError::InvertedLatitude { .. }
        ));
    }

    #[test]
    fn test_zero_area_rejected() {
        // Zero width
        let bbox = BBox::new(10.0, 0.0, 10.0, 5.0);
        assert!(bbox.validate().is_err());

        // Zero height
        let bbox = BBox::new(-10.0, 5.0, 10.0, 5.0);
        assert!(bbox.validate().is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let bbox = BBox::new(f64::NAN, 0.0, 10.0, 5.0);
        assert_eq!(bbox.validate().unwrap_err(), RegionError::NonFinite);

        let bbox = BBox::new(-10.0, 0.0, f64::INFINITY, 5.0);
        assert_eq!(bbox.validate().unwrap_err(), RegionError::NonFinite);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let bbox = BBox::new(-200.0, 0.0, 10.0, 5.0);
        assert!(matches!(
            bbox.validate().unwrap_err(),
            RegionError::LongitudeOutOfRange(_)
        ));

        let bbox = BBox::new(-10.0, -89.0, 10.0, 5.0);
        assert!(matches!(
            bbox.validate().unwrap_err(),
            RegionError::LatitudeOutOfRange(_)
        ));
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0).to_polygon();
        let b = BBox::new(5.0, 5.0, 15.0, 15.0).to_polygon();
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_contained_box_overlaps() {
        let outer = BBox::new(0.0, 0.0, 10.0, 10.0).to_polygon();
        let inner = BBox::new(2.0, 2.0, 4.0, 4.0).to_polygon();
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_disjoint_boxes_do_not_overlap() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0).to_polygon();
        let b = BBox::new(20.0, 20.0, 30.0, 30.0).to_polygon();
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_edge_touching_boxes_do_not_overlap() {
        // Shared edge, no shared area
        let a = BBox::new(0.0, 0.0, 10.0, 10.0).to_polygon();
        let b = BBox::new(10.0, 0.0, 20.0, 10.0).to_polygon();
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_corner_touching_boxes_do_not_overlap() {
        let a = BBox::new(0.0, 0.0, 10.0, 10.0).to_polygon();
        let b = BBox::new(10.0, 10.0, 20.0, 20.0).to_polygon();
        assert!(!overlaps(&a, &b));
    }
}
