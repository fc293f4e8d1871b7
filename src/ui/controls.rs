use crate::{
    input::ControlKind,
    rendering::overlay::ControlRegion,
    ui::{style::ZoomControlStyle, to_egui_rect},
};
use egui::{Align2, Id, Pos2, Response, Sense, Ui};

/// Click areas for the zoom/reset buttons.
///
/// Interacted after the map surface, which puts them on top of it: a press on
/// a button is a click on the button, never the start of a drag.
pub struct ControlButtons {
    responses: Vec<(ControlKind, Response)>,
}

impl ControlButtons {
    pub fn interact(ui: &mut Ui, origin: Pos2, id: Id, regions: &[ControlRegion]) -> Self {
        let responses = regions
            .iter()
            .map(|region| {
                let rect = to_egui_rect(origin, &region.rect);
                let response = ui.interact(rect, id.with(region.kind), Sense::click());
                (region.kind, response)
            })
            .collect();
        Self { responses }
    }

    /// First button clicked this frame
    pub fn clicked(&self) -> Option<ControlKind> {
        self.responses
            .iter()
            .find(|(_, response)| response.clicked())
            .map(|(kind, _)| *kind)
    }

    /// Paints one button; `enabled` only changes the glyph color, a click on a
    /// disabled button is simply a no-op on the viewport
    pub fn paint(
        &self,
        ui: &Ui,
        painter: &egui::Painter,
        kind: ControlKind,
        enabled: bool,
        style: &ZoomControlStyle,
    ) {
        let Some((_, response)) = self.responses.iter().find(|(k, _)| *k == kind) else {
            return;
        };
        let rect = response.rect;

        let fill = if response.is_pointer_button_down_on() {
            style.pressed_color
        } else if response.hovered() {
            style.hover_color
        } else {
            style.background_color
        };
        painter.rect_filled(rect, style.rounding, fill);
        painter.rect_stroke(rect, style.rounding, style.border_stroke);

        let color = if enabled {
            style.text_color
        } else {
            style.disabled_text_color
        };
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            kind.glyph(),
            style.font_id.clone(),
            color,
        );

        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    /// Attaches tooltips; consumes the responses
    pub fn finish(self) {
        for (kind, response) in self.responses {
            response.on_hover_text(kind.tooltip());
        }
    }
}
