use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Overlay buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    ZoomIn,
    ZoomOut,
    Reset,
}

impl ControlKind {
    pub const ALL: [ControlKind; 3] = [ControlKind::ZoomIn, ControlKind::ZoomOut, ControlKind::Reset];

    pub fn glyph(&self) -> &'static str {
        match self {
            ControlKind::ZoomIn => "+",
            ControlKind::ZoomOut => "−",
            ControlKind::Reset => "⟲",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            ControlKind::ZoomIn => "Zoom in",
            ControlKind::ZoomOut => "Zoom out",
            ControlKind::Reset => "Reset view",
        }
    }
}

/// Input events the map view reacts to, positions in container coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown { position: Point },
    /// Pointer moved, pressed or not
    PointerMove { position: Point },
    /// Primary button released
    PointerUp { position: Point },
    /// Pointer left the container
    PointerLeave,
    /// Wheel tick; negative `delta_y` means away from the user
    Wheel { delta_y: f64, position: Point },
    /// One of the overlay buttons was clicked
    ControlClick(ControlKind),
}

impl InputEvent {
    /// Gets the position associated with this event, if any
    pub fn position(&self) -> Option<Point> {
        match self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerUp { position }
            | InputEvent::Wheel { position, .. } => Some(*position),
            InputEvent::PointerLeave | InputEvent::ControlClick(_) => None,
        }
    }

    /// Checks if this is a press/move/release/leave event
    pub fn is_pointer_event(&self) -> bool {
        matches!(
            self,
            InputEvent::PointerDown { .. }
                | InputEvent::PointerMove { .. }
                | InputEvent::PointerUp { .. }
                | InputEvent::PointerLeave
        )
    }
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

impl EventHandled {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventHandled::Handled)
    }
}
