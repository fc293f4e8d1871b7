use crate::{
    core::{
        config::MapViewConfig,
        geo::{self, Point},
        location::LocationInput,
        map::MapView,
    },
    input::InputEvent,
    rendering::{
        animation::PULSE,
        overlay::OverlayLayout,
        scene::{DrawCommand, LabelRole, Scene},
    },
    ui::{controls::ControlButtons, style::MapViewStyle, to_egui_rect, to_point, to_pos2},
};
use egui::{Align2, Id, Pos2, Response, Sense, Stroke, Ui, Vec2, Widget};
use std::time::Duration;

/// Height used when the caller gives no explicit size
pub const DEFAULT_HEIGHT: f32 = 320.0;

const PLACEHOLDER_TEXT: &str = "Loading map...";
const DISCLAIMER_TEXT: &str = "Illustrative map. Exact location may vary.";
const ANIMATION_FRAME: Duration = Duration::from_millis(33);

/// Placeholder map widget for a single property.
///
/// The widget itself is rebuilt every frame; the [`MapView`] behind it
/// (viewport, drag state) lives in egui memory under [`MapWidget::state_id`].
#[derive(Debug, Clone)]
pub struct MapWidget {
    location: LocationInput,
    config: MapViewConfig,
    style: MapViewStyle,
    size: Option<Vec2>,
    id: Option<Id>,
}

impl MapWidget {
    pub fn new(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self::from_location(LocationInput::new(latitude, longitude, address))
    }

    pub fn from_location(location: LocationInput) -> Self {
        Self {
            location,
            config: MapViewConfig::default(),
            style: MapViewStyle::default(),
            size: None,
            id: None,
        }
    }

    pub fn config(mut self, config: MapViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn style(mut self, style: MapViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    /// Explicit state id, for two maps of the same property on one screen
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Memory key of the view state. Derived from the location unless set.
    pub fn state_id(&self) -> Id {
        self.id.unwrap_or_else(|| {
            Id::new("estatemap_view")
                .with(&self.location.address)
                .with(self.location.latitude.to_bits())
                .with(self.location.longitude.to_bits())
        })
    }

    /// View state stored by a previous frame, if any
    pub fn load_state(ctx: &egui::Context, id: Id) -> Option<MapView> {
        ctx.memory(|mem| mem.data.get_temp::<MapView>(id))
    }

    fn restore_view(&self, ctx: &egui::Context, id: Id) -> MapView {
        match Self::load_state(ctx, id) {
            Some(mut view) if view.location() == &self.location => {
                if let Err(err) = view.set_config(self.config.clone()) {
                    log::warn!("keeping previous map config: {}", err);
                }
                view
            }
            _ => self.fresh_view(),
        }
    }

    fn fresh_view(&self) -> MapView {
        MapView::with_config(self.location.clone(), self.config.clone()).unwrap_or_else(|err| {
            log::warn!("falling back to default map config: {}", err);
            MapView::new(self.location.clone())
        })
    }

    /// Turns this frame's egui input into map events
    fn collect_events(
        &self,
        ui: &Ui,
        response: &Response,
        view: &MapView,
        buttons: &ControlButtons,
    ) -> Vec<InputEvent> {
        let origin = response.rect.min;
        let mut events = Vec::new();

        if let Some(kind) = buttons.clicked() {
            events.push(InputEvent::ControlClick(kind));
        }

        if response.drag_started() {
            let press = ui
                .input(|i| i.pointer.press_origin())
                .or(response.interact_pointer_pos());
            if let Some(press) = press {
                events.push(InputEvent::PointerDown {
                    position: to_point(origin, press),
                });
            }
        }

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if response.rect.contains(pos) {
                    events.push(InputEvent::PointerMove {
                        position: to_point(origin, pos),
                    });
                } else {
                    events.push(InputEvent::PointerLeave);
                }
            }
        } else if view.drag_state().is_dragging() {
            let position = response
                .hover_pos()
                .map(|pos| to_point(origin, pos))
                .unwrap_or(Point::ZERO);
            events.push(InputEvent::PointerUp { position });
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let position = response
                    .hover_pos()
                    .map(|pos| to_point(origin, pos))
                    .unwrap_or(Point::ZERO);
                // egui reports "scroll up" as positive, the wheel delta is the opposite
                events.push(InputEvent::Wheel {
                    delta_y: -f64::from(scroll),
                    position,
                });
            }
        }

        events
    }

    fn paint_scene(
        &self,
        ui: &Ui,
        rect: egui::Rect,
        id: Id,
        scene: &Scene,
        buttons: &ControlButtons,
    ) {
        let painter = ui.painter_at(rect);
        let origin = rect.min;
        let style = &self.style;

        for command in &scene.commands {
            match command {
                DrawCommand::Background { rect } => {
                    let rect = to_egui_rect(origin, rect);
                    painter.rect_filled(rect, style.rounding, style.background_color);
                }
                DrawCommand::Block { rect, kind } => {
                    let rect = to_egui_rect(origin, rect);
                    painter.rect_filled(rect, 0.0, style.block_color(*kind));
                }
                DrawCommand::Road {
                    from,
                    to,
                    width,
                    main,
                } => {
                    painter.line_segment(
                        [to_pos2(origin, from), to_pos2(origin, to)],
                        Stroke::new(*width as f32, style.road_color(*main)),
                    );
                }
                DrawCommand::Halo { center, radius } => {
                    let frame = PULSE.sample(ui.input(|i| i.time));
                    painter.circle_filled(
                        to_pos2(origin, center),
                        (radius * frame.scale) as f32,
                        style.markers.halo_color.gamma_multiply(frame.opacity as f32),
                    );
                }
                DrawCommand::Pin {
                    center,
                    radius,
                    core_radius,
                } => {
                    let center = to_pos2(origin, center);
                    painter.circle_filled(center, *radius as f32, style.markers.color);
                    painter.circle_stroke(center, *radius as f32, style.markers.border_stroke);
                    painter.circle_filled(center, *core_radius as f32, style.markers.core_color);
                }
                DrawCommand::Label {
                    role,
                    rect,
                    text,
                    full_text,
                } => {
                    let label_rect = self.paint_label(&painter, origin, *role, rect, text);
                    if text != full_text {
                        ui.interact(label_rect, id.with("address"), Sense::hover())
                            .on_hover_text(full_text);
                    }
                }
                DrawCommand::Button { region, enabled } => {
                    buttons.paint(ui, &painter, region.kind, *enabled, &style.zoom_controls);
                }
            }
        }
    }

    fn paint_label(
        &self,
        painter: &egui::Painter,
        origin: Pos2,
        role: LabelRole,
        rect: &geo::Rect,
        text: &str,
    ) -> egui::Rect {
        let labels = &self.style.labels;
        let rect = to_egui_rect(origin, rect);
        let galley =
            painter.layout_no_wrap(text.to_owned(), labels.font_id.clone(), labels.text_color);
        let background = match role {
            // Sized to the measured text rather than the estimate
            LabelRole::Coordinates => egui::Rect::from_min_size(
                rect.min,
                galley.size() + Vec2::splat(labels.padding * 2.0),
            ),
            LabelRole::Address => rect,
        };

        painter.rect_filled(background, labels.rounding, labels.background_color);
        painter.text(
            egui::pos2(background.left() + labels.padding, background.center().y),
            Align2::LEFT_CENTER,
            text,
            labels.font_id.clone(),
            labels.text_color,
        );
        background
    }

    fn paint_placeholder(&self, ui: &Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, self.style.rounding, self.style.background_color);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            PLACEHOLDER_TEXT,
            self.style.labels.font_id.clone(),
            self.style.placeholder_text_color,
        );
    }
}

impl Widget for MapWidget {
    fn ui(self, ui: &mut Ui) -> Response {
        let desired_size = self
            .size
            .unwrap_or_else(|| egui::vec2(ui.available_width(), DEFAULT_HEIGHT));
        let (rect, _) = ui.allocate_exact_size(desired_size, Sense::hover());
        let id = self.state_id();
        let size = Point::new(rect.width() as f64, rect.height() as f64);

        let mut view = self.restore_view(ui.ctx(), id);
        let regions = if view.config().show_controls {
            OverlayLayout::compute(&size, true).controls
        } else {
            Vec::new()
        };

        let sense = if view.config().interactive {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        };
        // Surface first: widgets registered later sit on top, so the buttons
        // keep their clicks
        let mut response = ui.interact(rect, id.with("surface"), sense);
        let buttons = ControlButtons::interact(ui, rect.min, id, &regions);

        let events = self.collect_events(ui, &response, &view, &buttons);
        for event in &events {
            view.handle_event(event, size);
        }

        let owns_wheel = view.config().interactive && view.config().zoom_on_wheel;
        if owns_wheel && ui.rect_contains_pointer(rect) {
            // egui spreads one wheel tick over several frames of
            // `smooth_scroll_delta`; drain it every frame, buttons included,
            // so the page never scrolls under the map
            ui.input_mut(|i| {
                i.raw_scroll_delta = Vec2::ZERO;
                i.smooth_scroll_delta = Vec2::ZERO;
            });
        }

        if view.drag_state().is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() && view.config().interactive {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        if view.take_dirty() {
            response.mark_changed();
        }

        match view.scene(size) {
            Some(scene) => {
                self.paint_scene(ui, rect, id, &scene, &buttons);
                ui.ctx().request_repaint_after(ANIMATION_FRAME);
            }
            None => self.paint_placeholder(ui, rect),
        }
        buttons.finish();

        if view.config().show_disclaimer {
            ui.label(
                egui::RichText::new(DISCLAIMER_TEXT)
                    .small()
                    .color(self.style.disclaimer_color),
            );
        }

        ui.ctx().memory_mut(|mem| mem.data.insert_temp(id, view));

        response
    }
}
