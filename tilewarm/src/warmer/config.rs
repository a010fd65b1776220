//! Warming run configuration.

use crate::coord::MAX_ZOOM;
use crate::geom::BBox;

use super::WarmerError;

/// Configuration for one warming run.
#[derive(Debug, Clone)]
pub struct WarmerConfig {
    /// Geographic region to warm.
    pub bbox: BBox,
    /// Layer name requested for every tile.
    pub layer_name: String,
    /// Artifact filenames requested per tile.
    pub filenames: Vec<String>,
    /// Zoom level of the starting tile.
    pub min_zoom: u8,
    /// Deepest zoom level to descend to. Tiles at this level are fetched
    /// but not expanded.
    pub max_zoom: u8,
}

impl WarmerConfig {
    /// Validate region and zoom bounds.
    pub fn validate(&self) -> Result<(), WarmerError> {
        self.bbox.validate()?;
        if self.min_zoom > self.max_zoom {
            return Err(WarmerError::InvalidZoomBounds {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        if self.max_zoom > MAX_ZOOM {
            return Err(WarmerError::UnsupportedZoom {
                zoom: self.max_zoom,
                limit: MAX_ZOOM,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WarmerConfig {
        WarmerConfig {
            bbox: BBox::new(-74.03, 40.69, -73.96, 40.75),
            layer_name: "basemap".to_string(),
            filenames: vec!["tile.png".to_string()],
            min_zoom: 10,
            max_zoom: 14,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_min_zoom_above_max_rejected() {
        let mut cfg = config();
        cfg.min_zoom = 15;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            WarmerError::InvalidZoomBounds { min: 15, max: 14 }
        ));
    }

    #[test]
    fn test_equal_zoom_bounds_allowed() {
        let mut cfg = config();
        cfg.min_zoom = 14;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_excessive_max_zoom_rejected() {
        let mut cfg = config();
        cfg.max_zoom = 30;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            WarmerError::UnsupportedZoom { zoom: 30, .. }
        ));
    }

    #[test]
    fn test_degenerate_region_rejected() {
        let mut cfg = config();
        cfg.bbox = BBox::new(-73.96, 40.69, -74.03, 40.75);
        assert!(matches!(
            cfg.validate().unwrap_err(),
            WarmerError::InvalidRegion(_)
        ));
    }
}
