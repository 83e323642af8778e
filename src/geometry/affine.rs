//! Affine transformation matrix.
//!
//! 2-D affine maps used as clone projections and IFS codes. Only the six
//! meaningful entries of the homogeneous 4x4 form are stored:
//!
//! ```text
//!   | sx  shx  0  tx |
//!   | shy  sy  0  ty |
//!   |  0    0  1   0 |
//!   |  0    0  0   1 |
//! ```
//!
//! Transform: `x' = x*sx + y*shx + tx`, `y' = x*shy + y*sy + ty`.
//!
//! The type is `Copy`, so every stored transform is an independent value and
//! editing the live projection can never alter a committed one.

use serde::{Deserialize, Serialize};

use super::Point2D;

/// Epsilon for affine matrix comparisons.
pub const AFFINE_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub sx: f64,
    pub shy: f64,
    pub shx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

impl AffineTransform {
    // ====================================================================
    // Construction
    // ====================================================================

    /// Identity matrix.
    pub const fn identity() -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Custom matrix from six components.
    pub const fn new_custom(sx: f64, shy: f64, shx: f64, sy: f64, tx: f64, ty: f64) -> Self {
        Self {
            sx,
            shy,
            shx,
            sy,
            tx,
            ty,
        }
    }

    /// Translation matrix.
    pub const fn translate(dx: f64, dy: f64) -> Self {
        Self::new_custom(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    /// Non-uniform scaling about the origin.
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new_custom(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation about the origin (the z axis), counter-clockwise for
    /// positive angles.
    pub fn rotate(angle_degrees: f64) -> Self {
        let (sa, ca) = angle_degrees.to_radians().sin_cos();
        Self::new_custom(ca, sa, -sa, ca, 0.0, 0.0)
    }

    // ====================================================================
    // Composition
    // ====================================================================

    /// `a ∘ b`: the result applies `b` first, then `a`.
    pub fn compose(a: &AffineTransform, b: &AffineTransform) -> Self {
        Self {
            sx: a.sx * b.sx + a.shx * b.shy,
            shx: a.sx * b.shx + a.shx * b.sy,
            tx: a.sx * b.tx + a.shx * b.ty + a.tx,
            shy: a.shy * b.sx + a.sy * b.shy,
            sy: a.shy * b.shx + a.sy * b.sy,
            ty: a.shy * b.tx + a.sy * b.ty + a.ty,
        }
    }

    /// Replace `self` with `edit ∘ self`, so `edit` acts after everything
    /// accumulated so far.
    pub fn pre_multiply(&mut self, edit: &AffineTransform) -> &mut Self {
        *self = Self::compose(edit, self);
        self
    }

    /// Explicit deep copy; identical to `Clone`, kept for readability at
    /// call sites that store a snapshot.
    pub fn deep_copy(&self) -> Self {
        *self
    }

    // ====================================================================
    // Application
    // ====================================================================

    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D {
            x: p.x * self.sx + p.y * self.shx + self.tx,
            y: p.x * self.shy + p.y * self.sy + self.ty,
        }
    }

    /// Transform every vertex of a polygon.
    pub fn apply_all(&self, points: &[Point2D]) -> Vec<Point2D> {
        points.iter().map(|&p| self.apply(p)).collect()
    }

    // ====================================================================
    // Inspection
    // ====================================================================

    /// `(a00, a01, a03, a10, a11, a13)` of the homogeneous 4x4 matrix,
    /// the column layout used by the IFS code table.
    pub fn ifs_row(&self) -> [f64; 6] {
        [self.sx, self.shx, self.tx, self.shy, self.sy, self.ty]
    }

    pub fn approx_eq(&self, other: &AffineTransform, eps: f64) -> bool {
        (self.sx - other.sx).abs() <= eps
            && (self.shy - other.shy).abs() <= eps
            && (self.shx - other.shx).abs() <= eps
            && (self.sy - other.sy).abs() <= eps
            && (self.tx - other.tx).abs() <= eps
            && (self.ty - other.ty).abs() <= eps
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}
