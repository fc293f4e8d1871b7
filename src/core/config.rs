//! Configuration for the placeholder map view
//!
//! The defaults reproduce the stock widget: zoom 0.5-3.0 in 0.2 steps, a 10x10
//! block grid and a 4-decimal coordinate label. A config can also be loaded
//! from JSON, where every field is optional.

use crate::{
    core::{
        constants::{
            COMPACT_COORDINATE_PRECISION, DEFAULT_ZOOM, DETAILED_COORDINATE_PRECISION, GRID_SIZE,
            MAX_COORDINATE_PRECISION, MIN_GRID_SIZE,
        },
        viewport::ZoomLimits,
    },
    MapError, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How many decimals the coordinate label carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelProfile {
    /// 4 decimals, e.g. `Lat: -22.1200`
    Compact,
    /// 5 decimals, e.g. `Lat: -22.12000`
    Detailed,
    Custom(usize),
}

impl LabelProfile {
    pub fn precision(&self) -> usize {
        match self {
            Self::Compact => COMPACT_COORDINATE_PRECISION,
            Self::Detailed => DETAILED_COORDINATE_PRECISION,
            Self::Custom(digits) => *digits,
        }
    }
}

impl Default for LabelProfile {
    fn default() -> Self {
        Self::Compact
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    pub zoom: ZoomLimits,
    /// Rows and columns of the synthesized block grid
    pub grid_size: usize,
    pub label_profile: LabelProfile,
    /// Accept drag and wheel input
    pub interactive: bool,
    /// Drag pans the grid
    pub pan_on_drag: bool,
    /// Wheel zooms; when off the wheel is left to the host so the page scrolls
    pub zoom_on_wheel: bool,
    /// Show the zoom/reset buttons
    pub show_controls: bool,
    /// Show the "representative map" caption below the widget
    pub show_disclaimer: bool,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomLimits::default(),
            grid_size: GRID_SIZE,
            label_profile: LabelProfile::default(),
            interactive: true,
            pan_on_drag: true,
            zoom_on_wheel: true,
            show_controls: true,
            show_disclaimer: true,
        }
    }
}

impl MapViewConfig {
    /// Default config with the 5-decimal coordinate label
    pub fn detailed() -> Self {
        Self {
            label_profile: LabelProfile::Detailed,
            ..Self::default()
        }
    }

    pub fn with_label_profile(mut self, profile: LabelProfile) -> Self {
        self.label_profile = profile;
        self
    }

    pub fn with_zoom_limits(mut self, min: f64, max: f64, step: f64) -> Self {
        self.zoom = ZoomLimits { min, max, step };
        self
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn coordinate_precision(&self) -> usize {
        self.label_profile.precision()
    }

    pub fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;
        if !(zoom.min > 0.0) {
            return Err(invalid(format!("min zoom must be positive, got {}", zoom.min)));
        }
        if zoom.min > zoom.max {
            return Err(invalid(format!(
                "min zoom {} exceeds max zoom {}",
                zoom.min, zoom.max
            )));
        }
        if !(zoom.min..=zoom.max).contains(&DEFAULT_ZOOM) {
            return Err(invalid(format!(
                "zoom range {}..={} must include the default zoom {}",
                zoom.min, zoom.max, DEFAULT_ZOOM
            )));
        }
        if !(zoom.step > 0.0) {
            return Err(invalid(format!("zoom step must be positive, got {}", zoom.step)));
        }
        if self.grid_size < MIN_GRID_SIZE {
            return Err(invalid(format!(
                "grid size must be at least {}, got {}",
                MIN_GRID_SIZE, self.grid_size
            )));
        }
        if self.coordinate_precision() > MAX_COORDINATE_PRECISION {
            return Err(invalid(format!(
                "coordinate precision must be at most {}, got {}",
                MAX_COORDINATE_PRECISION,
                self.coordinate_precision()
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text).map_err(|e| {
            log::warn!("rejected map config {}: {}", path.display(), e);
            e
        })
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn invalid(message: String) -> MapError {
    MapError::InvalidConfig(message)
}
