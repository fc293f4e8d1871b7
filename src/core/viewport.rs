use crate::core::{
    constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_SNAP_SCALE, ZOOM_STEP},
    geo::Point,
};
use serde::{Deserialize, Serialize};

/// Zoom bounds and the step used by the +/- controls and the wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: MIN_ZOOM,
            max: MAX_ZOOM,
            step: ZOOM_STEP,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, zoom: f64) -> f64 {
        snap_zoom(zoom).clamp(self.min, self.max)
    }
}

/// Rounds away the float drift of repeated `+= step`, so five steps of 0.2 land on 2.0
fn snap_zoom(zoom: f64) -> f64 {
    (zoom * ZOOM_SNAP_SCALE).round() / ZOOM_SNAP_SCALE
}

/// CSS-style transform applied to the whole grid container:
/// translate by `translate`, then scale by `scale` around the container centre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation in pixels
    pub translate: Point,
    /// Scale factor (1.0 = no scaling)
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn new(translate: Point, scale: f64) -> Self {
        Self { translate, scale }
    }

    /// Create identity transform (no change)
    pub fn identity() -> Self {
        Self {
            translate: Point::ZERO,
            scale: 1.0,
        }
    }

    /// Check if this is effectively an identity transform
    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < 1e-9 && self.translate.is_zero()
    }

    /// Maps a container point through the transform pivoting on `origin`
    pub fn apply(&self, point: &Point, origin: &Point) -> Point {
        origin
            .add(&self.translate)
            .add(&point.subtract(origin).multiply(self.scale))
    }
}

/// Pan/zoom state of one mounted map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    /// Current zoom factor, always within `limits`
    pub zoom: f64,
    /// Accumulated drag offset in pixels
    pub pan_offset: Point,
    limits: ZoomLimits,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ViewportState {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            zoom: limits.clamp(DEFAULT_ZOOM),
            pan_offset: Point::ZERO,
            limits,
        }
    }

    pub fn limits(&self) -> &ZoomLimits {
        &self.limits
    }

    /// Swaps the zoom bounds, pulling the current zoom inside them. The pan offset is kept.
    pub fn set_limits(&mut self, limits: ZoomLimits) {
        self.limits = limits;
        self.zoom = limits.clamp(self.zoom);
    }

    /// Sets the zoom level, clamping to the valid range. Returns whether it changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        let new_zoom = self.limits.clamp(zoom);
        if new_zoom == self.zoom {
            return false;
        }
        log::debug!("zoom {:.2} -> {:.2}", self.zoom, new_zoom);
        self.zoom = new_zoom;
        true
    }

    /// One step in; a no-op at the maximum
    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom((self.zoom + self.limits.step).min(self.limits.max))
    }

    /// One step out; a no-op at the minimum
    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom((self.zoom - self.limits.step).max(self.limits.min))
    }

    /// Accumulates a drag delta. The offset is never clamped.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        let delta = Point::new(dx, dy);
        if delta.is_zero() {
            return false;
        }
        self.pan_offset = self.pan_offset.add(&delta);
        true
    }

    /// Back to zoom 1 and no offset
    pub fn reset(&mut self) -> bool {
        let fresh = Self::new(self.limits);
        if *self == fresh {
            return false;
        }
        log::debug!("viewport reset");
        *self = fresh;
        true
    }

    pub fn is_default(&self) -> bool {
        *self == Self::new(self.limits)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom < self.limits.max
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom > self.limits.min
    }

    /// Transform for the grid container
    pub fn transform(&self) -> Transform {
        Transform::new(self.pan_offset, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_defaults() {
        let viewport = ViewportState::default();
        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.pan_offset, Point::ZERO);
        assert!(viewport.transform().is_identity());
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = ViewportState::default();

        for _ in 0..50 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom, 3.0);
        assert!(!viewport.zoom_in());

        for _ in 0..50 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.zoom, 0.5);
        assert!(!viewport.zoom_out());
    }

    #[test]
    fn test_five_steps_land_on_two() {
        let mut viewport = ViewportState::default();
        for _ in 0..5 {
            assert!(viewport.zoom_in());
        }
        assert_eq!(viewport.zoom, 2.0);
    }

    #[test]
    fn test_step_up_and_down_round_trips() {
        let mut viewport = ViewportState::default();
        viewport.zoom_in();
        assert_eq!(viewport.zoom, 1.2);
        viewport.zoom_out();
        assert_eq!(viewport.zoom, 1.0);
    }

    #[test]
    fn test_set_zoom_clamps() {
        let mut viewport = ViewportState::default();
        viewport.set_zoom(10.0);
        assert_eq!(viewport.zoom, 3.0);
        viewport.set_zoom(-1.0);
        assert_eq!(viewport.zoom, 0.5);
    }

    #[test]
    fn test_pan_accumulates_without_bounds() {
        let mut viewport = ViewportState::default();
        assert!(viewport.pan(1.0e6, -2.0e6));
        assert!(viewport.pan(1.0, 1.0));
        assert_eq!(viewport.pan_offset, Point::new(1_000_001.0, -1_999_999.0));
        assert!(!viewport.pan(0.0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut viewport = ViewportState::default();
        assert!(!viewport.reset());

        viewport.zoom_in();
        viewport.pan(15.0, -7.0);
        assert!(viewport.reset());
        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.pan_offset, Point::ZERO);
        assert!(viewport.is_default());
    }

    #[test]
    fn test_set_limits_clamps_zoom_and_keeps_pan() {
        let mut viewport = ViewportState::default();
        viewport.set_zoom(3.0);
        viewport.pan(4.0, 2.0);
        viewport.set_limits(ZoomLimits {
            min: 0.5,
            max: 2.0,
            step: 0.5,
        });
        assert_eq!(viewport.zoom, 2.0);
        assert_eq!(viewport.pan_offset, Point::new(4.0, 2.0));
        viewport.zoom_out();
        assert_eq!(viewport.zoom, 1.5);
    }

    #[test]
    fn test_transform_pivots_on_origin() {
        let transform = Transform::new(Point::new(10.0, 0.0), 2.0);
        let origin = Point::new(100.0, 100.0);

        assert_eq!(transform.apply(&origin, &origin), Point::new(110.0, 100.0));
        assert_eq!(
            transform.apply(&Point::new(0.0, 0.0), &origin),
            Point::new(-90.0, -100.0)
        );
    }
}
