pub mod controls;
pub mod style;
pub mod widget;

pub use controls::ControlButtons;
pub use style::{LabelStyle, MapViewStyle, MarkerStyle, ZoomControlStyle};
pub use widget::MapWidget;

use crate::core::{
    geo::{Point, Rect},
    location::LocationInput,
};

pub trait UiMapExt {
    fn property_map(&mut self, lat: f64, lng: f64, address: &str) -> egui::Response;

    fn property_map_at(&mut self, location: &LocationInput) -> egui::Response;
}

impl UiMapExt for egui::Ui {
    fn property_map(&mut self, lat: f64, lng: f64, address: &str) -> egui::Response {
        self.add(MapWidget::new(lat, lng, address))
    }

    fn property_map_at(&mut self, location: &LocationInput) -> egui::Response {
        self.add(MapWidget::from_location(location.clone()))
    }
}

// Container-local map coordinates to screen space and back. `origin` is the
// top-left of the widget rect.

pub(crate) fn to_pos2(origin: egui::Pos2, point: &Point) -> egui::Pos2 {
    egui::pos2(origin.x + point.x as f32, origin.y + point.y as f32)
}

pub(crate) fn to_egui_rect(origin: egui::Pos2, rect: &Rect) -> egui::Rect {
    egui::Rect::from_min_max(to_pos2(origin, &rect.min), to_pos2(origin, &rect.max))
}

pub(crate) fn to_point(origin: egui::Pos2, pos: egui::Pos2) -> Point {
    Point::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_and_screen_coordinates_agree() {
        let origin = egui::pos2(10.0, 20.0);
        let local = Point::new(5.0, 7.5);
        let screen = to_pos2(origin, &local);
        assert_eq!(screen, egui::pos2(15.0, 27.5));
        assert_eq!(to_point(origin, screen), local);

        let rect = to_egui_rect(origin, &Rect::from_min_size(Point::ZERO, Point::new(30.0, 30.0)));
        assert_eq!(rect.min, origin);
        assert_eq!(rect.width(), 30.0);
    }
}
