use crate::{
    core::{
        config::MapViewConfig,
        geo::Point,
        location::LocationInput,
        viewport::ViewportState,
    },
    input::{
        events::{EventHandled, InputEvent},
        handler::{Action, DragState, InputHandler},
    },
    rendering::{
        overlay::{coordinate_label, OverlayLayout},
        scene::{Scene, SceneBuilder},
    },
    Result,
};

/// One mounted placeholder map: a location, its viewport and the input state machine.
///
/// Every mutation marks the view dirty; [`MapView::scene`] rebuilds the whole
/// render tree from scratch, so there is nothing to invalidate piecemeal.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    location: LocationInput,
    config: MapViewConfig,
    viewport: ViewportState,
    input: InputHandler,
    dirty: bool,
}

impl MapView {
    /// Map view with the default configuration
    pub fn new(location: LocationInput) -> Self {
        Self::build(location, MapViewConfig::default())
    }

    pub fn with_config(location: LocationInput, config: MapViewConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(location, config))
    }

    fn build(location: LocationInput, config: MapViewConfig) -> Self {
        let mut input = InputHandler::new();
        configure_input(&mut input, &config);
        Self {
            viewport: ViewportState::new(config.zoom),
            location,
            config,
            input,
            dirty: true,
        }
    }

    pub fn location(&self) -> &LocationInput {
        &self.location
    }

    pub fn config(&self) -> &MapViewConfig {
        &self.config
    }

    /// Replaces the configuration, keeping the current pan and (clamped) zoom
    pub fn set_config(&mut self, config: MapViewConfig) -> Result<()> {
        config.validate()?;
        if config == self.config {
            return Ok(());
        }
        self.viewport.set_limits(config.zoom);
        configure_input(&mut self.input, &config);
        if !config.interactive || !config.pan_on_drag {
            self.input.cancel_drag();
        }
        self.config = config;
        self.dirty = true;
        Ok(())
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn drag_state(&self) -> DragState {
        self.input.drag_state()
    }

    pub fn zoom_in(&mut self) -> bool {
        self.apply(Action::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.apply(Action::ZoomOut)
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        self.apply(Action::Pan {
            delta: Point::new(dx, dy),
        })
    }

    pub fn reset(&mut self) -> bool {
        self.apply(Action::Reset)
    }

    /// Applies one action to the viewport. Returns whether anything changed.
    pub fn apply(&mut self, action: Action) -> bool {
        let changed = match action {
            Action::ZoomIn => self.viewport.zoom_in(),
            Action::ZoomOut => self.viewport.zoom_out(),
            Action::Pan { delta } => self.viewport.pan(delta.x, delta.y),
            Action::Reset => self.viewport.reset(),
        };
        self.dirty |= changed;
        changed
    }

    /// Feeds an input event; `size` is the current container size, used to
    /// keep presses on the buttons from starting a drag
    pub fn handle_event(&mut self, event: &InputEvent, size: Point) -> EventHandled {
        let layout = OverlayLayout::compute(&size, self.config.show_controls);
        let output = self.input.handle_event(event, &layout.controls);
        for action in output.actions {
            self.apply(action);
        }
        output.handled
    }

    /// Returns and clears the "needs repaint" flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn coordinate_label(&self) -> String {
        coordinate_label(
            &self.location.position(),
            self.config.coordinate_precision(),
        )
    }

    /// Render tree for a container of `size`; `None` while it has no area
    pub fn scene(&self, size: Point) -> Option<Scene> {
        SceneBuilder::new(&self.viewport, &self.location, &self.config).build(size)
    }
}

fn configure_input(input: &mut InputHandler, config: &MapViewConfig) {
    input.enabled = config.interactive;
    input.pan_on_drag = config.pan_on_drag;
    input.zoom_on_wheel = config.zoom_on_wheel;
}
