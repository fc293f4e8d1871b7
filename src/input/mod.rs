pub mod events;
pub mod handler;

pub use events::{ControlKind, EventHandled, InputEvent};
pub use handler::{Action, DragState, HandlerOutput, InputHandler};
