pub mod animation;
pub mod overlay;
pub mod projection;
pub mod scene;

pub use animation::{PulseAnimation, PulseFrame, PULSE};
pub use overlay::{ControlRegion, OverlayLayout};
pub use scene::{DrawCommand, LabelRole, Scene, SceneBuilder};
