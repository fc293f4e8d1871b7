//! Core constants for the placeholder map.
//! Keeping them in a single place makes it easier to tweak widget-wide magic numbers.

/// Smallest zoom factor the viewport accepts.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest zoom factor the viewport accepts.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom factor on mount and after a reset.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Programmatic +/- zoom step for `zoom_in/zoom_out` and wheel ticks.
pub const ZOOM_STEP: f64 = 0.2;

/// Zoom values are rounded to `1 / ZOOM_SNAP_SCALE` so repeated steps stay on the step grid.
pub const ZOOM_SNAP_SCALE: f64 = 1e9;

/// Rows and columns of the synthesized block grid.
pub const GRID_SIZE: usize = 10;

/// Smallest grid that still has room for the commercial cluster and both parks:
/// the near park sits three cells before the middle.
pub const MIN_GRID_SIZE: usize = 6;

/// Decimal places on the coordinate label (compact variant).
pub const COMPACT_COORDINATE_PRECISION: usize = 4;

/// Decimal places on the coordinate label (detailed variant).
pub const DETAILED_COORDINATE_PRECISION: usize = 5;

/// Upper bound accepted for a custom coordinate precision.
pub const MAX_COORDINATE_PRECISION: usize = 10;

/// Default city centre used for placeholder coordinates (lat, lng).
pub const DEFAULT_CITY_CENTER: (f64, f64) = (-22.12, -49.94);

/// Placeholder coordinates are spread over `[0, PLACEHOLDER_SPREAD)` degrees per axis.
pub const PLACEHOLDER_SPREAD: f64 = 0.05;

/// Control button edge length in pixels.
pub const CONTROL_BUTTON_SIZE: f64 = 30.0;

/// Distance between overlay elements and the container edge.
pub const OVERLAY_MARGIN: f64 = 8.0;

/// Vertical gap between stacked control buttons.
pub const CONTROL_SPACING: f64 = 5.0;

/// Height reserved for the address strip at the bottom.
pub const ADDRESS_STRIP_HEIGHT: f64 = 28.0;

/// Height of the coordinate label box.
pub const LABEL_HEIGHT: f64 = 20.0;

/// Rough advance width of one glyph of the overlay font, used to elide the address.
pub const APPROX_GLYPH_WIDTH: f64 = 7.0;

/// Outer radius of the location pin.
pub const MARKER_RADIUS: f64 = 12.0;

/// Radius of the white dot inside the pin.
pub const MARKER_CORE_RADIUS: f64 = 4.0;

/// Pixel width of an ordinary road at zoom 1.
pub const ROAD_WIDTH: f64 = 1.0;

/// Pixel width of the main road at zoom 1.
pub const MAIN_ROAD_WIDTH: f64 = 4.0;

/// Length of one pulse cycle of the marker halo.
pub const PULSE_PERIOD_SECS: f64 = 1.0;
