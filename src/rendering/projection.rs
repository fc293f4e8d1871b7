//! Pure functions between grid percent space and container pixels.
//!
//! Only the grid goes through the viewport transform; the marker is pinned to
//! the container centre, which is what makes the map "centred on" the property.

use crate::core::{
    geo::{Point, Rect},
    viewport::Transform,
};

/// A container with no area has not been laid out yet
pub fn is_attached(size: &Point) -> bool {
    size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0
}

pub fn container_center(size: &Point) -> Point {
    Point::new(size.x / 2.0, size.y / 2.0)
}

/// Percent (0-100) to untransformed container pixels
pub fn percent_to_container(percent: &Point, size: &Point) -> Point {
    Point::new(percent.x * size.x / 100.0, percent.y * size.y / 100.0)
}

/// Percent to container pixels with pan and zoom applied, pivoting on the centre
pub fn grid_to_screen(percent: &Point, size: &Point, transform: &Transform) -> Point {
    transform.apply(&percent_to_container(percent, size), &container_center(size))
}

pub fn grid_rect_to_screen(rect: &Rect, size: &Point, transform: &Transform) -> Rect {
    Rect::new(
        grid_to_screen(&rect.min, size, transform),
        grid_to_screen(&rect.max, size, transform),
    )
}

/// Where the pin goes: the container centre, whatever the viewport says
pub fn marker_position(size: &Point) -> Point {
    container_center(size)
}
