use crate::grid::CellKind;
use egui::{Color32, FontId, Stroke};

/// Style configuration for the placeholder map
#[derive(Debug, Clone)]
pub struct MapViewStyle {
    /// Container background, also shown while the map is not laid out yet
    pub background_color: Color32,
    /// Ordinary blocks
    pub plain_block_color: Color32,
    /// The downtown "+" cluster
    pub commercial_block_color: Color32,
    pub park_color: Color32,
    pub road_color: Color32,
    pub main_road_color: Color32,
    /// Rounded corners of the container
    pub rounding: f32,
    pub markers: MarkerStyle,
    pub labels: LabelStyle,
    pub zoom_controls: ZoomControlStyle,
    /// Caption text under the map
    pub disclaimer_color: Color32,
    pub placeholder_text_color: Color32,
}

/// Style for the location pin
#[derive(Debug, Clone)]
pub struct MarkerStyle {
    pub color: Color32,
    /// The dot in the middle of the pin
    pub core_color: Color32,
    pub halo_color: Color32,
    pub border_stroke: Stroke,
}

/// Style for coordinate and address readouts
#[derive(Debug, Clone)]
pub struct LabelStyle {
    pub text_color: Color32,
    pub background_color: Color32,
    pub font_id: FontId,
    pub padding: f32,
    pub rounding: f32,
}

/// Style for zoom/reset buttons
#[derive(Debug, Clone)]
pub struct ZoomControlStyle {
    pub background_color: Color32,
    pub hover_color: Color32,
    pub pressed_color: Color32,
    pub text_color: Color32,
    /// Glyph color of a button that would do nothing
    pub disabled_text_color: Color32,
    pub border_stroke: Stroke,
    pub font_id: FontId,
    pub rounding: f32,
}

impl Default for MapViewStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgb(229, 231, 235),
            plain_block_color: Color32::from_rgb(243, 244, 246),
            commercial_block_color: Color32::from_rgb(254, 243, 199),
            park_color: Color32::from_rgb(187, 247, 208),
            road_color: Color32::from_rgb(209, 213, 219),
            main_road_color: Color32::from_rgb(156, 163, 175),
            rounding: 8.0,
            markers: MarkerStyle::default(),
            labels: LabelStyle::default(),
            zoom_controls: ZoomControlStyle::default(),
            disclaimer_color: Color32::from_gray(107),
            placeholder_text_color: Color32::from_gray(107),
        }
    }
}

impl Default for MarkerStyle {
    fn default() -> Self {
        let primary = Color32::from_rgb(0, 84, 166);
        Self {
            color: primary,
            core_color: Color32::WHITE,
            halo_color: primary,
            border_stroke: Stroke::new(2.0, Color32::WHITE),
        }
    }
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            text_color: Color32::from_gray(31),
            background_color: Color32::from_rgba_unmultiplied(255, 255, 255, 215),
            font_id: FontId::proportional(12.0),
            padding: 4.0,
            rounding: 4.0,
        }
    }
}

impl Default for ZoomControlStyle {
    fn default() -> Self {
        Self {
            background_color: Color32::from_rgba_unmultiplied(255, 255, 255, 230),
            hover_color: Color32::from_gray(235),
            pressed_color: Color32::from_gray(210),
            text_color: Color32::BLACK,
            disabled_text_color: Color32::from_gray(170),
            border_stroke: Stroke::new(1.0, Color32::from_gray(160)),
            font_id: FontId::proportional(16.0),
            rounding: 4.0,
        }
    }
}

impl MapViewStyle {
    pub fn block_color(&self, kind: CellKind) -> Color32 {
        match kind {
            CellKind::Park => self.park_color,
            CellKind::Commercial => self.commercial_block_color,
            CellKind::Plain => self.plain_block_color,
        }
    }

    pub fn road_color(&self, main: bool) -> Color32 {
        if main {
            self.main_road_color
        } else {
            self.road_color
        }
    }

    /// Darker palette for dark host themes
    pub fn dark() -> Self {
        Self {
            background_color: Color32::from_rgb(31, 41, 55),
            plain_block_color: Color32::from_rgb(55, 65, 81),
            commercial_block_color: Color32::from_rgb(120, 53, 15),
            park_color: Color32::from_rgb(20, 83, 45),
            road_color: Color32::from_rgb(75, 85, 99),
            main_road_color: Color32::from_rgb(107, 114, 128),
            disclaimer_color: Color32::from_gray(156),
            placeholder_text_color: Color32::from_gray(156),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_colors_are_distinct() {
        let style = MapViewStyle::default();
        let park = style.block_color(CellKind::Park);
        let commercial = style.block_color(CellKind::Commercial);
        let plain = style.block_color(CellKind::Plain);
        assert_ne!(park, commercial);
        assert_ne!(park, plain);
        assert_ne!(commercial, plain);
        assert_ne!(style.road_color(true), style.road_color(false));
    }

    #[test]
    fn test_dark_keeps_marker_style() {
        let dark = MapViewStyle::dark();
        assert_ne!(dark.background_color, MapViewStyle::default().background_color);
        assert_eq!(dark.markers.core_color, Color32::WHITE);
    }
}
