//! Per-stage scene storage.

use std::collections::BTreeMap;
use std::ops::Range;

use super::{BatchView, PrimitiveKind, SceneTarget, ShapeBatch, Stage};
use crate::geometry::{ColorRgba, Point2D};

/// One entry of a renderer's draw list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub kind: PrimitiveKind,
    /// Slice of the scene's vertex/color arrays covered by this shape
    pub range: Range<usize>,
    pub applies_live_projection: bool,
}

/// Ordered shape batches of a single stage, stored flat.
///
/// Invariants:
/// - `shapes`, `vertex_counts` and `projection_flags` have one entry per shape
/// - `vertices.len() == colors.len() == vertex_counts.iter().sum()`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<PrimitiveKind>,
    vertex_counts: Vec<usize>,
    vertices: Vec<Point2D>,
    colors: Vec<ColorRgba>,
    projection_flags: Vec<bool>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch after every existing one.
    ///
    /// Returns `false` and leaves the scene untouched when the batch's
    /// vertex and color lists differ in length.
    pub fn push(&mut self, batch: &ShapeBatch) -> bool {
        if batch.vertices.len() != batch.colors.len() {
            return false;
        }
        self.shapes.push(batch.kind);
        self.vertex_counts.push(batch.vertices.len());
        self.vertices.extend_from_slice(&batch.vertices);
        self.colors.extend_from_slice(&batch.colors);
        self.projection_flags.push(batch.applies_live_projection);
        true
    }

    /// Remove the most recently pushed batch and hand it back.
    pub fn pop(&mut self) -> Option<ShapeBatch> {
        let kind = self.shapes.pop()?;
        let count = self.vertex_counts.pop().unwrap_or(0);
        let applies_live_projection = self.projection_flags.pop().unwrap_or(false);

        let start = self.vertices.len() - count;
        let vertices = self.vertices.split_off(start);
        let colors = self.colors.split_off(start);

        Some(ShapeBatch::new(kind, vertices, colors, applies_live_projection))
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Total vertices across all shapes
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn colors(&self) -> &[ColorRgba] {
        &self.colors
    }

    pub fn vertex_counts(&self) -> &[usize] {
        &self.vertex_counts
    }

    /// Draw list in insertion order
    pub fn draw_calls(&self) -> Vec<DrawCall> {
        let mut start = 0;
        self.shapes
            .iter()
            .zip(&self.vertex_counts)
            .zip(&self.projection_flags)
            .map(|((&kind, &count), &flag)| {
                let call = DrawCall {
                    kind,
                    range: start..start + count,
                    applies_live_projection: flag,
                };
                start += count;
                call
            })
            .collect()
    }

    /// Iterate over the stored batches without copying
    pub fn iter(&self) -> impl Iterator<Item = BatchView<'_>> + '_ {
        self.draw_calls().into_iter().map(move |call| BatchView {
            kind: call.kind,
            vertices: &self.vertices[call.range.clone()],
            colors: &self.colors[call.range],
            applies_live_projection: call.applies_live_projection,
        })
    }

    /// The most recently pushed batch
    pub fn last(&self) -> Option<BatchView<'_>> {
        self.iter().last()
    }
}

/// Scenes keyed by stage.
///
/// A stage's scene exists once it has been created by `replace_stage` or by
/// a shape being added to it; the Draw scene exists from the start.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStore {
    scenes: BTreeMap<Stage, Scene>,
}

impl SceneStore {
    pub fn new() -> Self {
        let mut scenes = BTreeMap::new();
        scenes.insert(Stage::Draw, Scene::new());
        Self { scenes }
    }

    /// Append a batch to one stage, or to every existing stage.
    ///
    /// Returns `false` when the batch was refused (see [`Scene::push`]).
    pub fn add_shape(&mut self, target: impl Into<SceneTarget>, batch: &ShapeBatch) -> bool {
        if batch.vertices.len() != batch.colors.len() {
            return false;
        }
        match target.into() {
            SceneTarget::Stage(stage) => self.scenes.entry(stage).or_default().push(batch),
            SceneTarget::All => self.scenes.values_mut().all(|scene| scene.push(batch)),
        }
    }

    /// Pop the most recent batch of a stage. No-op on an empty or missing
    /// scene.
    pub fn remove_last_shape(&mut self, stage: Stage) -> Option<ShapeBatch> {
        self.scenes.get_mut(&stage).and_then(Scene::pop)
    }

    /// Discard everything a stage holds and start it over with `scene`
    pub fn replace_stage(&mut self, stage: Stage, scene: Scene) {
        self.scenes.insert(stage, scene);
    }

    pub fn scene(&self, stage: Stage) -> Option<&Scene> {
        self.scenes.get(&stage)
    }

    /// Stages whose scene currently exists
    pub fn stages(&self) -> impl Iterator<Item = Stage> + '_ {
        self.scenes.keys().copied()
    }

    /// Vertex count of a stage's scene (0 when absent)
    pub fn vertex_count(&self, stage: Stage) -> usize {
        self.scene(stage).map(Scene::vertex_count).unwrap_or(0)
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn triangle(color: ColorRgba) -> ShapeBatch {
        ShapeBatch::uniform(
            PrimitiveKind::PolygonOutline,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(0.5, 0.0),
                Point2D::new(0.0, 0.5),
            ],
            color,
            false,
        )
    }

    fn points(n: usize) -> ShapeBatch {
        let vertices = (0..n).map(|i| Point2D::new(i as f64, 0.0)).collect();
        ShapeBatch::uniform(PrimitiveKind::PointCloud, vertices, ColorRgba::WHITE, true)
    }

    #[test]
    fn test_new_store_has_only_draw_scene() {
        let store = SceneStore::new();
        assert_eq!(store.stages().collect::<Vec<_>>(), vec![Stage::Draw]);
        assert!(store.scene(Stage::Draw).unwrap().is_empty());
    }

    #[test]
    fn test_remove_last_restores_prior_state() {
        let mut scene = Scene::new();
        scene.push(&triangle(ColorRgba::WHITE));
        scene.push(&points(4));
        let before = scene.clone();

        let added = triangle(ColorRgba::GREEN);
        scene.push(&added);
        assert_eq!(scene.len(), 3);
        assert_eq!(scene.vertex_count(), 10);

        let popped = scene.pop().unwrap();
        assert_eq!(popped, added);
        assert_eq!(scene, before);
    }

    #[test]
    fn test_interleaved_adds_and_removes_keep_counts_consistent() {
        let mut scene = Scene::new();
        let mut snapshots = vec![scene.clone()];
        for n in 1..6 {
            scene.push(&points(n));
            snapshots.push(scene.clone());
        }
        while let Some(expected) = snapshots.pop() {
            assert_eq!(scene, expected);
            assert_eq!(scene.vertex_counts().len(), scene.len());
            assert_eq!(scene.vertices().len(), scene.colors().len());
            assert_eq!(
                scene.vertex_counts().iter().sum::<usize>(),
                scene.vertex_count()
            );
            scene.pop();
        }
        assert!(scene.pop().is_none());
    }

    #[test]
    fn test_mismatched_batch_is_refused() {
        let mut scene = Scene::new();
        let broken = ShapeBatch {
            kind: PrimitiveKind::PolygonOutline,
            vertices: vec![Point2D::ORIGIN; 3],
            colors: Vec::new(),
            applies_live_projection: false,
        };
        assert!(!scene.push(&broken));
        assert!(scene.is_empty());

        assert!(scene.push(&points(2)));
        assert_eq!(scene.pop(), Some(points(2)));
        assert!(scene.pop().is_none());

        let mut store = SceneStore::new();
        assert!(!store.add_shape(Stage::Clone, &broken));
        assert!(store.scene(Stage::Clone).is_none());
        assert!(!store.add_shape(SceneTarget::All, &broken));
        assert!(store.scene(Stage::Draw).unwrap().is_empty());
    }

    #[test]
    fn test_draw_calls_cover_consecutive_ranges() {
        let mut scene = Scene::new();
        scene.push(&triangle(ColorRgba::WHITE));
        scene.push(&points(2));

        let calls = scene.draw_calls();
        assert_eq!(
            calls,
            vec![
                DrawCall {
                    kind: PrimitiveKind::PolygonOutline,
                    range: 0..3,
                    applies_live_projection: false,
                },
                DrawCall {
                    kind: PrimitiveKind::PointCloud,
                    range: 3..5,
                    applies_live_projection: true,
                },
            ]
        );
        assert_eq!(scene.last().unwrap().to_owned(), points(2));
    }

    #[test]
    fn test_add_to_all_reaches_every_existing_scene() {
        let mut store = SceneStore::new();
        store.replace_stage(Stage::Clone, Scene::new());
        store.add_shape(SceneTarget::All, &triangle(ColorRgba::WHITE));

        assert_eq!(store.scene(Stage::Draw).unwrap().len(), 1);
        assert_eq!(store.scene(Stage::Clone).unwrap().len(), 1);
        assert!(store.scene(Stage::Spray).is_none());
    }

    #[test]
    fn test_replace_stage_discards_previous_shapes() {
        let mut store = SceneStore::new();
        store.add_shape(Stage::Spray, &points(10));
        assert_eq!(store.vertex_count(Stage::Spray), 10);

        store.replace_stage(Stage::Spray, Scene::new());
        assert_eq!(store.vertex_count(Stage::Spray), 0);
        assert!(store.remove_last_shape(Stage::Spray).is_none());
    }
}
