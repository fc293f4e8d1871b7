use crate::{
    core::{
        config::MapViewConfig,
        constants::{
            APPROX_GLYPH_WIDTH, LABEL_HEIGHT, MAIN_ROAD_WIDTH, MARKER_CORE_RADIUS, MARKER_RADIUS,
            ROAD_WIDTH,
        },
        geo::{Point, Rect},
        location::LocationInput,
        viewport::ViewportState,
    },
    grid::{CellKind, GridSynthesizer},
    input::ControlKind,
    rendering::{
        overlay::{coordinate_label, elide, text_capacity, ControlRegion, OverlayLayout},
        projection::{grid_rect_to_screen, grid_to_screen, is_attached, marker_position},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    Coordinates,
    Address,
}

/// Commands that make up one frame of the map, in paint order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Container background, never transformed
    Background { rect: Rect },
    /// One block of the synthesized grid
    Block { rect: Rect, kind: CellKind },
    Road {
        from: Point,
        to: Point,
        width: f64,
        main: bool,
    },
    /// Pulsing ring behind the pin; the painter samples the pulse
    Halo { center: Point, radius: f64 },
    Pin {
        center: Point,
        radius: f64,
        core_radius: f64,
    },
    Label {
        role: LabelRole,
        rect: Rect,
        text: String,
        /// Unelided text, for hover
        full_text: String,
    },
    Button { region: ControlRegion, enabled: bool },
}

/// Render tree for one container size and viewport
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub size: Point,
    pub commands: Vec<DrawCommand>,
    pub controls: Vec<ControlRegion>,
}

impl Scene {
    pub fn marker_position(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::Pin { center, .. } => Some(*center),
            _ => None,
        })
    }

    pub fn blocks(&self) -> impl Iterator<Item = (&Rect, CellKind)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Block { rect, kind } => Some((rect, *kind)),
            _ => None,
        })
    }

    pub fn label(&self, wanted: LabelRole) -> Option<&str> {
        self.commands.iter().find_map(|cmd| match cmd {
            DrawCommand::Label { role, text, .. } if *role == wanted => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Builds a [`Scene`] from viewport, location and config. Pure: the same
/// inputs always give the same scene.
pub struct SceneBuilder<'a> {
    viewport: &'a ViewportState,
    location: &'a LocationInput,
    config: &'a MapViewConfig,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(
        viewport: &'a ViewportState,
        location: &'a LocationInput,
        config: &'a MapViewConfig,
    ) -> Self {
        Self {
            viewport,
            location,
            config,
        }
    }

    /// `None` until the container has a positive size
    pub fn build(&self, size: Point) -> Option<Scene> {
        if !is_attached(&size) {
            return None;
        }
        log::trace!(
            "building scene {}x{} zoom {:.2} pan ({:.1}, {:.1})",
            size.x,
            size.y,
            self.viewport.zoom,
            self.viewport.pan_offset.x,
            self.viewport.pan_offset.y
        );

        let container = Rect::from_min_size(Point::ZERO, size);
        let mut commands = vec![DrawCommand::Background { rect: container }];

        self.push_grid(&mut commands, &size, &container);
        self.push_marker(&mut commands, &size);
        let layout = OverlayLayout::compute(&size, self.config.show_controls);
        self.push_overlay(&mut commands, &layout);

        Some(Scene {
            size,
            commands,
            controls: layout.controls,
        })
    }

    fn push_grid(&self, commands: &mut Vec<DrawCommand>, size: &Point, container: &Rect) {
        let transform = self.viewport.transform();
        let synth = GridSynthesizer::new(self.config.grid_size);

        // Blocks panned fully out of view are dropped
        commands.extend(synth.cells().filter_map(|cell| {
            let rect = grid_rect_to_screen(&cell.rect, size, &transform);
            rect.intersects(container).then_some(DrawCommand::Block {
                rect,
                kind: cell.kind,
            })
        }));

        commands.extend(synth.roads().map(|road| {
            let (from, to) = road.endpoints();
            let base = if road.main { MAIN_ROAD_WIDTH } else { ROAD_WIDTH };
            DrawCommand::Road {
                from: grid_to_screen(&from, size, &transform),
                to: grid_to_screen(&to, size, &transform),
                width: base * transform.scale,
                main: road.main,
            }
        }));
    }

    fn push_marker(&self, commands: &mut Vec<DrawCommand>, size: &Point) {
        let center = marker_position(size);
        commands.push(DrawCommand::Halo {
            center,
            radius: MARKER_RADIUS,
        });
        commands.push(DrawCommand::Pin {
            center,
            radius: MARKER_RADIUS,
            core_radius: MARKER_CORE_RADIUS,
        });
    }

    fn push_overlay(&self, commands: &mut Vec<DrawCommand>, layout: &OverlayLayout) {
        let coordinates = coordinate_label(
            &self.location.position(),
            self.config.coordinate_precision(),
        );
        let width = coordinates.chars().count() as f64 * APPROX_GLYPH_WIDTH;
        commands.push(DrawCommand::Label {
            role: LabelRole::Coordinates,
            rect: Rect::from_min_size(layout.coordinates_anchor, Point::new(width, LABEL_HEIGHT)),
            full_text: coordinates.clone(),
            text: coordinates,
        });

        if let Some(rect) = layout.address_rect {
            commands.push(DrawCommand::Label {
                role: LabelRole::Address,
                rect,
                text: elide(&self.location.address, text_capacity(rect.width())),
                full_text: self.location.address.clone(),
            });
        }

        for region in &layout.controls {
            let enabled = match region.kind {
                ControlKind::ZoomIn => self.viewport.can_zoom_in(),
                ControlKind::ZoomOut => self.viewport.can_zoom_out(),
                ControlKind::Reset => !self.viewport.is_default(),
            };
            commands.push(DrawCommand::Button {
                region: *region,
                enabled,
            });
        }
    }
}
