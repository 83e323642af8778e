//! 2-D point in clip-space coordinates.

use serde::{Deserialize, Serialize};

/// A point in the canvas' clip space (`[-1, 1]` on both axes when visible)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a canvas-relative pixel position into clip space.
    ///
    /// Pixel rows grow downwards while clip space grows upwards, so the
    /// vertical axis is flipped.
    pub fn from_canvas(px: f64, py: f64, width: f64, height: f64) -> Self {
        Self {
            x: 2.0 * px / width - 1.0,
            y: 2.0 * (height - py) / height - 1.0,
        }
    }

    /// Component-wise comparison within `eps`
    pub fn approx_eq(&self, other: &Point2D, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_corners_map_to_clip_corners() {
        let top_left = Point2D::from_canvas(0.0, 0.0, 512.0, 512.0);
        assert_eq!(top_left, Point2D::new(-1.0, 1.0));

        let bottom_right = Point2D::from_canvas(512.0, 512.0, 512.0, 512.0);
        assert_eq!(bottom_right, Point2D::new(1.0, -1.0));

        let center = Point2D::from_canvas(256.0, 256.0, 512.0, 512.0);
        assert_eq!(center, Point2D::ORIGIN);
    }

    #[test]
    fn test_approx_eq() {
        let a = Point2D::new(0.5, 0.25);
        assert!(a.approx_eq(&Point2D::new(0.5 + 1e-12, 0.25), 1e-9));
        assert!(!a.approx_eq(&Point2D::new(0.51, 0.25), 1e-9));
    }
}
