//! Shape batches: one primitive with its vertices and per-vertex colors.

use serde::{Deserialize, Serialize};

use crate::geometry::{ColorRgba, Point2D};

/// Primitive used to rasterize a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// Closed outline through every vertex (line loop)
    PolygonOutline,
    /// Filled polygon fanned from the first vertex
    FilledFan,
    /// Independent points
    PointCloud,
}

/// An owned drawable batch.
///
/// `vertices` and `colors` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBatch {
    pub kind: PrimitiveKind,
    pub vertices: Vec<Point2D>,
    pub colors: Vec<ColorRgba>,
    /// Whether the renderer must apply the live clone projection
    pub applies_live_projection: bool,
}

impl ShapeBatch {
    /// Batch with explicit per-vertex colors.
    ///
    /// `colors` must match `vertices` in length.
    pub fn new(
        kind: PrimitiveKind,
        vertices: Vec<Point2D>,
        colors: Vec<ColorRgba>,
        applies_live_projection: bool,
    ) -> Self {
        debug_assert_eq!(vertices.len(), colors.len());
        Self {
            kind,
            vertices,
            colors,
            applies_live_projection,
        }
    }

    /// Batch where every vertex shares one color
    pub fn uniform(
        kind: PrimitiveKind,
        vertices: Vec<Point2D>,
        color: ColorRgba,
        applies_live_projection: bool,
    ) -> Self {
        let colors = vec![color; vertices.len()];
        Self::new(kind, vertices, colors, applies_live_projection)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Borrowed view of a batch stored inside a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchView<'a> {
    pub kind: PrimitiveKind,
    pub vertices: &'a [Point2D],
    pub colors: &'a [ColorRgba],
    pub applies_live_projection: bool,
}

impl BatchView<'_> {
    pub fn to_owned(&self) -> ShapeBatch {
        ShapeBatch::new(
            self.kind,
            self.vertices.to_vec(),
            self.colors.to_vec(),
            self.applies_live_projection,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_fills_every_vertex() {
        let batch = ShapeBatch::uniform(
            PrimitiveKind::FilledFan,
            vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0)],
            ColorRgba::GREEN,
            false,
        );
        assert_eq!(batch.len(), 3);
        assert!(batch.colors.iter().all(|c| *c == ColorRgba::GREEN));
    }
}
