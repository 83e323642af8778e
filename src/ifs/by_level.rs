//! By-level fractalization.
//!
//! Draws the seed, then recursively draws every clone of it, every clone of
//! those, and so on, `level` generations deep. The number of shapes for `N`
//! transforms is `1 + N + N^2 + ... + N^(level-1)`; the level is the only
//! bound on the work.

use tracing::debug;

use crate::geometry::{AffineTransform, ColorRgba, Point2D};
use crate::scene::{PrimitiveKind, ShapeBatch};

use super::derive_child_color;

/// Depth-first by-level generator over a fixed IFS code
#[derive(Debug, Clone, Copy)]
pub struct ByLevelGenerator<'a> {
    transforms: &'a [AffineTransform],
    color_offset: u8,
}

impl<'a> ByLevelGenerator<'a> {
    pub fn new(transforms: &'a [AffineTransform], color_offset: u8) -> Self {
        Self {
            transforms,
            color_offset,
        }
    }

    /// Append the fans for `seed` and all its descendants to `out`, in
    /// depth-first order (a parent, then each child subtree by branch).
    ///
    /// Traversal uses an explicit stack; depth is bounded by memory only.
    pub fn generate(
        &self,
        seed: &[Point2D],
        level: u32,
        color: ColorRgba,
        out: &mut Vec<ShapeBatch>,
    ) {
        if level == 0 {
            return;
        }

        let mut pending = vec![(seed.to_vec(), level, color)];
        while let Some((vertices, level, color)) = pending.pop() {
            if level > 1 {
                // Reversed so branch 0 is popped first.
                for (branch, transform) in self.transforms.iter().enumerate().rev() {
                    pending.push((
                        transform.apply_all(&vertices),
                        level - 1,
                        derive_child_color(color, branch, self.color_offset),
                    ));
                }
            }
            out.push(ShapeBatch::uniform(
                PrimitiveKind::FilledFan,
                vertices,
                color,
                false,
            ));
        }
    }

    /// Shapes produced for `level` generations
    pub fn shape_count(&self, level: u32) -> usize {
        let n = self.transforms.len();
        let (total, _) = (0..level).fold((0usize, 1usize), |(total, layer), _| {
            (total.saturating_add(layer), layer.saturating_mul(n))
        });
        total
    }
}

/// Convenience form returning a freshly allocated list
pub fn generate_by_level(
    seed: &[Point2D],
    level: u32,
    color: ColorRgba,
    transforms: &[AffineTransform],
    color_offset: u8,
) -> Vec<ShapeBatch> {
    let generator = ByLevelGenerator::new(transforms, color_offset);
    let mut out = Vec::with_capacity(generator.shape_count(level).min(1 << 16));
    generator.generate(seed, level, color, &mut out);
    debug!(
        level,
        transforms = transforms.len(),
        shapes = out.len(),
        "by-level fractal generated"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2D> {
        vec![
            Point2D::new(-0.5, -0.5),
            Point2D::new(0.5, -0.5),
            Point2D::new(0.5, 0.5),
            Point2D::new(-0.5, 0.5),
        ]
    }

    #[test]
    fn test_level_zero_emits_nothing() {
        let t = [AffineTransform::scale(0.5, 0.5)];
        assert!(generate_by_level(&square(), 0, ColorRgba::DARK_GRAY, &t, 0).is_empty());
    }

    #[test]
    fn test_level_one_is_just_the_seed() {
        let t = [AffineTransform::scale(0.5, 0.5), AffineTransform::translate(0.1, 0.0)];
        let shapes = generate_by_level(&square(), 1, ColorRgba::DARK_GRAY, &t, 0);
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].kind, PrimitiveKind::FilledFan);
        assert_eq!(shapes[0].vertices, square());
        assert!(shapes[0].colors.iter().all(|c| *c == ColorRgba::DARK_GRAY));
    }

    #[test]
    fn test_level_two_colors_children_by_branch() {
        let t = [AffineTransform::scale(0.5, 0.5), AffineTransform::translate(0.1, 0.0)];
        let offset = 4;
        let shapes = generate_by_level(&square(), 2, ColorRgba::DARK_GRAY, &t, offset);

        assert_eq!(shapes.len(), 3);
        assert_eq!(
            shapes[1].colors[0],
            derive_child_color(ColorRgba::DARK_GRAY, 0, offset)
        );
        assert_eq!(
            shapes[2].colors[0],
            derive_child_color(ColorRgba::DARK_GRAY, 1, offset)
        );
    }

    #[test]
    fn test_child_vertices_are_projected() {
        let t = [AffineTransform::compose(
            &AffineTransform::translate(0.25, 0.25),
            &AffineTransform::scale(0.5, 0.5),
        )];
        let shapes = generate_by_level(&square(), 2, ColorRgba::DARK_GRAY, &t, 0);
        assert_eq!(shapes.len(), 2);

        let expected = [(0.0, 0.0), (0.5, 0.0), (0.5, 0.5), (0.0, 0.5)];
        for (v, (x, y)) in shapes[1].vertices.iter().zip(expected) {
            assert_relative_eq!(v.x, x);
            assert_relative_eq!(v.y, y);
        }
    }

    #[test]
    fn test_depth_first_order() {
        // With two transforms at level 3 the order is:
        // root, b0, b0.b0, b0.b1, b1, b1.b0, b1.b1
        let t = [
            AffineTransform::translate(1.0, 0.0),
            AffineTransform::translate(0.0, 1.0),
        ];
        let seed = [Point2D::ORIGIN];
        let shapes = generate_by_level(&seed, 3, ColorRgba::DARK_GRAY, &t, 0);
        let firsts: Vec<(f64, f64)> = shapes
            .iter()
            .map(|s| (s.vertices[0].x, s.vertices[0].y))
            .collect();
        assert_eq!(
            firsts,
            vec![
                (0.0, 0.0),
                (1.0, 0.0),
                (2.0, 0.0),
                (1.0, 1.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (0.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_shape_count_matches_geometric_series() {
        let t = [AffineTransform::identity(); 3];
        let generator = ByLevelGenerator::new(&t, 0);
        for level in 0..6 {
            let mut out = Vec::new();
            generator.generate(&[Point2D::ORIGIN], level, ColorRgba::WHITE, &mut out);
            assert_eq!(out.len(), generator.shape_count(level));
        }
        assert_eq!(generator.shape_count(4), 1 + 3 + 9 + 27);
    }

    #[test]
    fn test_very_deep_single_branch() {
        let t = [AffineTransform::scale(0.5, 0.5)];
        let seed = [
            Point2D::new(-0.5, -0.5),
            Point2D::new(0.5, -0.5),
            Point2D::new(0.0, 0.5),
        ];
        let shapes = generate_by_level(&seed, 200_000, ColorRgba::DARK_GRAY, &t, 0);
        assert_eq!(shapes.len(), 200_000);
        assert_relative_eq!(shapes[1].vertices[2].y, 0.25);
    }

    #[test]
    fn test_appends_to_existing_accumulator() {
        let t = [AffineTransform::identity()];
        let generator = ByLevelGenerator::new(&t, 0);
        let mut out = vec![ShapeBatch::uniform(
            PrimitiveKind::PointCloud,
            vec![Point2D::ORIGIN],
            ColorRgba::WHITE,
            false,
        )];
        generator.generate(&[Point2D::ORIGIN], 2, ColorRgba::WHITE, &mut out);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].kind, PrimitiveKind::PointCloud);
    }
}
