use crate::{
    core::geo::Point,
    input::events::{ControlKind, EventHandled, InputEvent},
    rendering::overlay::ControlRegion,
};

/// Viewport mutation requested by an input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    Pan { delta: Point },
    Reset,
}

impl From<ControlKind> for Action {
    fn from(kind: ControlKind) -> Self {
        match kind {
            ControlKind::ZoomIn => Action::ZoomIn,
            ControlKind::ZoomOut => Action::ZoomOut,
            ControlKind::Reset => Action::Reset,
        }
    }
}

/// Drag-to-pan state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `last` is the pointer position the next delta is measured from
    Dragging { last: Point },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }
}

/// Outcome of feeding one event to the [`InputHandler`]
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerOutput {
    pub handled: EventHandled,
    pub actions: Vec<Action>,
}

impl HandlerOutput {
    fn ignored() -> Self {
        Self {
            handled: EventHandled::NotHandled,
            actions: Vec::new(),
        }
    }

    fn handled(actions: Vec<Action>) -> Self {
        Self {
            handled: EventHandled::Handled,
            actions,
        }
    }
}

/// Turns pointer, wheel and button events into viewport actions
#[derive(Debug, Clone, PartialEq)]
pub struct InputHandler {
    pub enabled: bool,
    pub pan_on_drag: bool,
    pub zoom_on_wheel: bool,
    drag: DragState,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pan_on_drag: true,
            zoom_on_wheel: true,
            drag: DragState::Idle,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// `controls` are the button hit regions; a press on one of them never starts a drag
    pub fn handle_event(&mut self, event: &InputEvent, controls: &[ControlRegion]) -> HandlerOutput {
        if !self.enabled && !matches!(event, InputEvent::ControlClick(_)) {
            return HandlerOutput::ignored();
        }

        match *event {
            InputEvent::PointerDown { position } => {
                if !self.pan_on_drag || controls.iter().any(|c| c.contains(&position)) {
                    return HandlerOutput::ignored();
                }
                log::debug!("drag start at ({:.1}, {:.1})", position.x, position.y);
                self.drag = DragState::Dragging { last: position };
                HandlerOutput::handled(Vec::new())
            }
            InputEvent::PointerMove { position } => match self.drag {
                DragState::Dragging { last } => {
                    self.drag = DragState::Dragging { last: position };
                    let delta = position.subtract(&last);
                    let actions = if delta.is_zero() {
                        Vec::new()
                    } else {
                        vec![Action::Pan { delta }]
                    };
                    HandlerOutput::handled(actions)
                }
                DragState::Idle => HandlerOutput::ignored(),
            },
            InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                if self.drag.is_dragging() {
                    log::debug!("drag end");
                    self.drag = DragState::Idle;
                    HandlerOutput::handled(Vec::new())
                } else {
                    HandlerOutput::ignored()
                }
            }
            InputEvent::Wheel { delta_y, .. } => {
                if !self.zoom_on_wheel {
                    return HandlerOutput::ignored();
                }
                // Consumed even when it does not zoom, so the host never scrolls
                let actions = if delta_y < 0.0 {
                    vec![Action::ZoomIn]
                } else if delta_y > 0.0 {
                    vec![Action::ZoomOut]
                } else {
                    Vec::new()
                };
                HandlerOutput::handled(actions)
            }
            InputEvent::ControlClick(kind) => HandlerOutput::handled(vec![Action::from(kind)]),
        }
    }

    /// Drops any drag in progress
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Rect;

    fn down(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerDown {
            position: Point::new(x, y),
        }
    }

    fn moved(x: f64, y: f64) -> InputEvent {
        InputEvent::PointerMove {
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_drag_emits_incremental_deltas() {
        let mut handler = InputHandler::new();
        assert!(handler.handle_event(&down(100.0, 100.0), &[]).handled.is_handled());
        assert!(handler.drag_state().is_dragging());

        let first = handler.handle_event(&moved(110.0, 105.0), &[]);
        assert_eq!(
            first.actions,
            vec![Action::Pan {
                delta: Point::new(10.0, 5.0)
            }]
        );
        let second = handler.handle_event(&moved(120.0, 130.0), &[]);
        assert_eq!(
            second.actions,
            vec![Action::Pan {
                delta: Point::new(10.0, 25.0)
            }]
        );

        let up = handler.handle_event(
            &InputEvent::PointerUp {
                position: Point::new(120.0, 130.0),
            },
            &[],
        );
        assert!(up.handled.is_handled());
        assert_eq!(handler.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_move_while_idle_is_ignored() {
        let mut handler = InputHandler::new();
        let output = handler.handle_event(&moved(5.0, 5.0), &[]);
        assert_eq!(output.handled, EventHandled::NotHandled);
        assert!(output.actions.is_empty());
    }

    #[test]
    fn test_leave_ends_drag() {
        let mut handler = InputHandler::new();
        handler.handle_event(&down(0.0, 0.0), &[]);
        handler.handle_event(&InputEvent::PointerLeave, &[]);
        assert_eq!(handler.drag_state(), DragState::Idle);
        assert!(handler.handle_event(&moved(50.0, 50.0), &[]).actions.is_empty());
    }

    #[test]
    fn test_press_on_control_does_not_start_drag() {
        let mut handler = InputHandler::new();
        let controls = [ControlRegion {
            kind: ControlKind::ZoomIn,
            rect: Rect::from_min_size(Point::new(10.0, 10.0), Point::new(30.0, 30.0)),
        }];
        let output = handler.handle_event(&down(20.0, 20.0), &controls);
        assert_eq!(output.handled, EventHandled::NotHandled);
        assert_eq!(handler.drag_state(), DragState::Idle);

        let click = handler.handle_event(&InputEvent::ControlClick(ControlKind::ZoomIn), &controls);
        assert_eq!(click.actions, vec![Action::ZoomIn]);
    }

    #[test]
    fn test_wheel_direction() {
        let mut handler = InputHandler::new();
        let wheel = |delta_y| InputEvent::Wheel {
            delta_y,
            position: Point::ZERO,
        };
        assert_eq!(handler.handle_event(&wheel(-10.0), &[]).actions, vec![Action::ZoomIn]);
        assert_eq!(handler.handle_event(&wheel(10.0), &[]).actions, vec![Action::ZoomOut]);

        let flat = handler.handle_event(&wheel(0.0), &[]);
        assert!(flat.handled.is_handled());
        assert!(flat.actions.is_empty());
    }

    #[test]
    fn test_disabled_handler_still_accepts_buttons() {
        let mut handler = InputHandler::new();
        handler.enabled = false;
        assert!(!handler.handle_event(&down(1.0, 1.0), &[]).handled.is_handled());
        let click = handler.handle_event(&InputEvent::ControlClick(ControlKind::Reset), &[]);
        assert_eq!(click.actions, vec![Action::Reset]);
    }
}
