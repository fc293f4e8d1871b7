//! Layout and text of the controls overlay: buttons top-right, coordinates
//! top-left, address strip along the bottom.

use crate::{
    core::{
        constants::{
            ADDRESS_STRIP_HEIGHT, APPROX_GLYPH_WIDTH, CONTROL_BUTTON_SIZE, CONTROL_SPACING,
            OVERLAY_MARGIN,
        },
        geo::{LatLng, Point, Rect},
    },
    input::events::ControlKind,
};
use serde::{Deserialize, Serialize};

/// Hit region of one overlay button, in container coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlRegion {
    pub kind: ControlKind,
    pub rect: Rect,
}

impl ControlRegion {
    pub fn contains(&self, point: &Point) -> bool {
        self.rect.contains(point)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    pub controls: Vec<ControlRegion>,
    pub coordinates_anchor: Point,
    pub address_rect: Option<Rect>,
}

impl OverlayLayout {
    pub fn compute(size: &Point, show_controls: bool) -> Self {
        let controls = if show_controls {
            let x = size.x - OVERLAY_MARGIN - CONTROL_BUTTON_SIZE;
            ControlKind::ALL
                .iter()
                .enumerate()
                .map(|(i, kind)| ControlRegion {
                    kind: *kind,
                    rect: Rect::from_min_size(
                        Point::new(
                            x,
                            OVERLAY_MARGIN + i as f64 * (CONTROL_BUTTON_SIZE + CONTROL_SPACING),
                        ),
                        Point::new(CONTROL_BUTTON_SIZE, CONTROL_BUTTON_SIZE),
                    ),
                })
                .collect()
        } else {
            Vec::new()
        };

        let strip_width = size.x - 2.0 * OVERLAY_MARGIN;
        let address_rect = (strip_width > 0.0).then(|| {
            Rect::from_min_size(
                Point::new(
                    OVERLAY_MARGIN,
                    size.y - OVERLAY_MARGIN - ADDRESS_STRIP_HEIGHT,
                ),
                Point::new(strip_width, ADDRESS_STRIP_HEIGHT),
            )
        });

        Self {
            controls,
            coordinates_anchor: Point::new(OVERLAY_MARGIN, OVERLAY_MARGIN),
            address_rect,
        }
    }
}

/// `"Lat: -22.1200, Lng: -49.9400"` for precision 4
pub fn coordinate_label(position: &LatLng, precision: usize) -> String {
    format!(
        "Lat: {:.*}, Lng: {:.*}",
        precision, position.lat, precision, position.lng
    )
}

/// How many glyphs fit on one line of the given pixel width
pub fn text_capacity(width: f64) -> usize {
    if width <= 0.0 {
        return 0;
    }
    (width / APPROX_GLYPH_WIDTH).floor() as usize
}

/// Shortens `text` to at most `max_chars` characters, ending in an ellipsis when cut
pub fn elide(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut short: String = text.chars().take(max_chars - 1).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_label_precision() {
        let position = LatLng::new(-22.12, -49.94);
        assert_eq!(coordinate_label(&position, 4), "Lat: -22.1200, Lng: -49.9400");
        assert_eq!(
            coordinate_label(&position, 5),
            "Lat: -22.12000, Lng: -49.94000"
        );
    }

    #[test]
    fn test_controls_stack_inside_container() {
        let size = Point::new(800.0, 600.0);
        let container = Rect::from_min_size(Point::ZERO, size);
        let layout = OverlayLayout::compute(&size, true);

        assert_eq!(layout.controls.len(), 3);
        for region in &layout.controls {
            assert!(container.contains_rect(&region.rect));
        }
        assert!(!layout.controls[0].rect.intersects(&layout.controls[1].rect));
        assert!(!layout.controls[1].rect.intersects(&layout.controls[2].rect));

        let zoom_in = &layout.controls[0];
        assert_eq!(zoom_in.kind, ControlKind::ZoomIn);
        assert!(zoom_in.contains(&zoom_in.rect.center()));
        assert!(!layout
            .controls
            .iter()
            .any(|region| region.contains(&Point::new(400.0, 300.0))));
    }

    #[test]
    fn test_hidden_controls_have_no_regions() {
        let layout = OverlayLayout::compute(&Point::new(800.0, 600.0), false);
        assert!(layout.controls.is_empty());
        assert!(layout.address_rect.is_some());
    }

    #[test]
    fn test_elide() {
        assert_eq!(elide("Rua A, Centro", 40), "Rua A, Centro");
        assert_eq!(elide("Avenida Getúlio Vargas", 8), "Avenida…");
        assert_eq!(elide("abc", 0), "");
        assert_eq!(text_capacity(70.0), 10);
        assert_eq!(text_capacity(-5.0), 0);
    }
}
