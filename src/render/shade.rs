//! Screen-position coloring for spray paint point clouds.

use crate::geometry::{ColorRgba, Point2D};

/// Smooth gradient over clip space: red grows to the right, green grows
/// upwards and blue fills in where both are low.
pub fn position_shade(p: Point2D) -> ColorRgba {
    let r = ((p.x + 1.0) / 2.0).clamp(0.0, 1.0);
    let g = ((p.y + 1.0) / 2.0).clamp(0.0, 1.0);
    let b = 1.0 - (r + g) / 2.0;
    ColorRgba::rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        assert_eq!(position_shade(Point2D::new(-1.0, -1.0)), ColorRgba::rgb(0.0, 0.0, 1.0));
        assert_eq!(position_shade(Point2D::new(1.0, 1.0)), ColorRgba::rgb(1.0, 1.0, 0.0));
        assert_eq!(position_shade(Point2D::ORIGIN), ColorRgba::rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_off_canvas_is_clamped() {
        let c = position_shade(Point2D::new(5.0, -5.0));
        assert_eq!((c.r, c.g), (1.0, 0.0));
    }
}
