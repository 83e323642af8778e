//! The seed polygon clicked out in the Draw stage.

use crate::geometry::{ColorRgba, Point2D};
use crate::scene::{PrimitiveKind, ShapeBatch};

pub const MAX_SEED_VERTICES: usize = 10;

/// Up to ten vertices, each with its own color (white by default)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedPolygon {
    vertices: Vec<Point2D>,
    colors: Vec<ColorRgba>,
}

impl SeedPolygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a white vertex; `false` once the polygon is full
    pub fn push(&mut self, point: Point2D) -> bool {
        self.push_colored(point, ColorRgba::WHITE)
    }

    pub fn push_colored(&mut self, point: Point2D, color: ColorRgba) -> bool {
        if self.is_full() {
            return false;
        }
        self.vertices.push(point);
        self.colors.push(color);
        true
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.colors.clear();
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn colors(&self) -> &[ColorRgba] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.vertices.len() >= MAX_SEED_VERTICES
    }

    /// Closed outline in the seed's own colors
    pub fn outline(&self) -> ShapeBatch {
        ShapeBatch::new(
            PrimitiveKind::PolygonOutline,
            self.vertices.clone(),
            self.colors.clone(),
            false,
        )
    }

    /// Closed outline of transformed vertices, keeping the seed's colors
    pub fn outline_of(&self, vertices: Vec<Point2D>) -> ShapeBatch {
        ShapeBatch::new(
            PrimitiveKind::PolygonOutline,
            vertices,
            self.colors.clone(),
            false,
        )
    }
}
