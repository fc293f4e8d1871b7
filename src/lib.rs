//! # estatemap
//!
//! A stylized placeholder map for property listings.
//!
//! The map is decorative: a synthesized block grid that can be dragged and
//! zoomed, with a pulsing pin fixed at the centre for the property's
//! coordinates. The state and geometry live in plain Rust types; the `egui`
//! feature adds the widget that paints them.

pub mod core;
pub mod grid;
pub mod input;
pub mod prelude;
pub mod rendering;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{LabelProfile, MapViewConfig},
    geo::{LatLng, Point, Rect},
    location::LocationInput,
    map::MapView,
    viewport::{Transform, ViewportState, ZoomLimits},
};

pub use grid::{CellKind, GridCell, GridSynthesizer, RoadSegment};

pub use input::{
    events::{ControlKind, EventHandled, InputEvent},
    handler::{Action, DragState, InputHandler},
};

pub use rendering::scene::{DrawCommand, LabelRole, Scene, SceneBuilder};

#[cfg(feature = "egui")]
pub use ui::{style::MapViewStyle, widget::MapWidget};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Routes this crate's `log` output through `env_logger`, filtered by `RUST_LOG`.
/// Later calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
