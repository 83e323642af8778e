//! Geometry Primitives
//!
//! Points, colors and the 2-D affine transform that places clones of the
//! seed polygon.

mod affine;
mod color;
mod point;

pub use affine::{AffineTransform, AFFINE_EPSILON};
pub use color::ColorRgba;
pub use point::Point2D;
