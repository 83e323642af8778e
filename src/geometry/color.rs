//! RGBA color with channels in `[0, 1]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorRgba {
    pub const WHITE: ColorRgba = ColorRgba::new(1.0, 1.0, 1.0, 1.0);
    pub const GREEN: ColorRgba = ColorRgba::new(0.0, 1.0, 0.0, 1.0);
    /// Fill color of the root polygon in a by-level fractal
    pub const DARK_GRAY: ColorRgba = ColorRgba::new(0.2, 0.2, 0.2, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three channels
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Perceived brightness, used by the terminal preview to pick glyphs
    pub fn luminance(&self) -> f64 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl Default for ColorRgba {
    fn default() -> Self {
        ColorRgba::WHITE
    }
}
