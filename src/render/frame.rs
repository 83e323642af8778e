//! Per-frame draw data handed to renderers.

use crate::error::Result;
use crate::geometry::{AffineTransform, ColorRgba, Point2D};
use crate::scene::{DrawCall, PrimitiveKind, Scene, Stage};

use super::position_shade;

/// Consumer of frames.
///
/// Implementations clear their target before drawing each frame.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Snapshot of the active stage ready for drawing
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub stage: Stage,
    pub vertices: &'a [Point2D],
    pub colors: &'a [ColorRgba],
    pub calls: Vec<DrawCall>,
    /// Applied to every call flagged `applies_live_projection`
    pub live_projection: AffineTransform,
    /// Point clouds are colored by screen position instead of their stored
    /// colors (spray paint stage)
    pub position_shading: bool,
}

impl<'a> Frame<'a> {
    pub fn new(stage: Stage, scene: &'a Scene, live_projection: AffineTransform) -> Self {
        Self {
            stage,
            vertices: scene.vertices(),
            colors: scene.colors(),
            calls: scene.draw_calls(),
            live_projection,
            position_shading: stage == Stage::Spray,
        }
    }

    /// Frame of a stage whose scene has not been built
    pub fn empty(stage: Stage, live_projection: AffineTransform) -> Self {
        Self {
            stage,
            vertices: &[],
            colors: &[],
            calls: Vec::new(),
            live_projection,
            position_shading: stage == Stage::Spray,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertices of one call, with the live projection applied when flagged
    pub fn resolve_vertices(&self, call: &DrawCall) -> Vec<Point2D> {
        let vertices = &self.vertices[call.range.clone()];
        if call.applies_live_projection {
            self.live_projection.apply_all(vertices)
        } else {
            vertices.to_vec()
        }
    }

    /// Final color of a vertex at `position` (already resolved)
    pub fn resolve_color(&self, call: &DrawCall, index: usize, position: Point2D) -> ColorRgba {
        if self.position_shading && call.kind == PrimitiveKind::PointCloud {
            position_shade(position)
        } else {
            self.colors[call.range.start + index]
        }
    }
}
