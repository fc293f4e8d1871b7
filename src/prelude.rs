//! Prelude module for common estatemap types and traits
//!
//! This module re-exports the most commonly used types for easy importing
//! with `use estatemap::prelude::*;`

pub use crate::core::{
    config::{LabelProfile, MapViewConfig},
    geo::{LatLng, Point, Rect},
    location::LocationInput,
    map::MapView,
    viewport::{Transform, ViewportState, ZoomLimits},
};

pub use crate::grid::{CellKind, GridCell, GridSynthesizer, RoadOrientation, RoadSegment};

pub use crate::input::{
    events::{ControlKind, EventHandled, InputEvent},
    handler::{Action, DragState, InputHandler},
};

pub use crate::rendering::{
    animation::{PulseAnimation, PulseFrame, PULSE},
    overlay::{ControlRegion, OverlayLayout},
    scene::{DrawCommand, LabelRole, Scene, SceneBuilder},
};

#[cfg(feature = "egui")]
pub use crate::ui::{
    style::{LabelStyle, MapViewStyle, MarkerStyle, ZoomControlStyle},
    widget::MapWidget,
    UiMapExt,
};

pub use crate::{Error as MapError, Result};
