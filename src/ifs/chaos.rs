//! Chaos game ("spray paint") renderer.
//!
//! A single point wanders the plane; each step applies one randomly chosen
//! transform. After a short burn-in the point lies on the attractor and
//! every later position is recorded.

use rand::Rng;
use tracing::debug;

use crate::geometry::{AffineTransform, ColorRgba, Point2D};
use crate::scene::{PrimitiveKind, ShapeBatch};

/// Iterations discarded before recording starts
pub const BURN_IN_ITERATIONS: usize = 21;

/// Chaos game over a fixed IFS code with precomputed selection boundaries.
///
/// The transform list must not be empty.
#[derive(Debug, Clone)]
pub struct ChaosGame<'a> {
    transforms: &'a [AffineTransform],
    cumulative: Vec<f64>,
}

impl<'a> ChaosGame<'a> {
    /// Every transform equally likely: `cumulative[i] = (i + 1) / N`
    pub fn uniform(transforms: &'a [AffineTransform]) -> Self {
        let n = transforms.len();
        let cumulative = (1..=n).map(|i| i as f64 / n as f64).collect();
        Self {
            transforms,
            cumulative,
        }
    }

    /// Explicit per-transform weights, normalised to sum to one.
    ///
    /// Missing weights count as zero; a zero total falls back to uniform.
    pub fn with_weights(transforms: &'a [AffineTransform], weights: &[f64]) -> Self {
        let weight = |i: usize| weights.get(i).copied().unwrap_or(0.0).max(0.0);
        let total: f64 = (0..transforms.len()).map(weight).sum();
        if total <= 0.0 {
            return Self::uniform(transforms);
        }

        let mut running = 0.0;
        let cumulative = (0..transforms.len())
            .map(|i| {
                running += weight(i);
                running / total
            })
            .collect();
        Self {
            transforms,
            cumulative,
        }
    }

    /// Cumulative selection boundaries
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Index of the transform chosen by a draw `p` in `[0, 1)`.
    ///
    /// The smallest index with `p <= cumulative[i]` wins, so a draw landing
    /// exactly on a boundary goes to the lower transform. Scanning stops at
    /// the last transform, absorbing rounding in the final boundary.
    pub fn select(&self, p: f64) -> usize {
        let last = self.transforms.len().saturating_sub(1);
        let mut t = 0;
        while t < last && p > self.cumulative[t] {
            t += 1;
        }
        t
    }

    /// Run the walk from the origin and return exactly `num_points`
    /// post-burn-in positions.
    pub fn generate<R: Rng + ?Sized>(&self, num_points: usize, rng: &mut R) -> Vec<Point2D> {
        let mut points = Vec::with_capacity(num_points);
        let mut current = Point2D::ORIGIN;

        for iter in 0..num_points + BURN_IN_ITERATIONS {
            let p: f64 = rng.gen();
            current = self.transforms[self.select(p)].apply(current);
            if iter >= BURN_IN_ITERATIONS {
                points.push(current);
            }
        }

        debug!(
            points = points.len(),
            transforms = self.transforms.len(),
            "chaos game generated"
        );
        points
    }

    /// The point cloud as a single white batch
    pub fn generate_batch<R: Rng + ?Sized>(&self, num_points: usize, rng: &mut R) -> ShapeBatch {
        ShapeBatch::uniform(
            PrimitiveKind::PointCloud,
            self.generate(num_points, rng),
            ColorRgba::WHITE,
            false,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sierpinski() -> Vec<AffineTransform> {
        let half = AffineTransform::scale(0.5, 0.5);
        vec![
            AffineTransform::compose(&AffineTransform::translate(-0.5, -0.5), &half),
            AffineTransform::compose(&AffineTransform::translate(0.5, -0.5), &half),
            AffineTransform::compose(&AffineTransform::translate(0.0, 0.5), &half),
        ]
    }

    #[test]
    fn test_identity_never_moves() {
        let t = [AffineTransform::identity()];
        let game = ChaosGame::uniform(&t);
        let mut rng = StdRng::seed_from_u64(1);
        let points = game.generate(100, &mut rng);
        assert_eq!(points.len(), 100);
        assert!(points.iter().all(|p| *p == Point2D::ORIGIN));
    }

    #[test]
    fn test_exact_point_count() {
        let t = sierpinski();
        let game = ChaosGame::uniform(&t);
        let mut rng = StdRng::seed_from_u64(2);
        for n in [0, 1, 17, 2000] {
            assert_eq!(game.generate(n, &mut rng).len(), n);
        }
    }

    #[test]
    fn test_uniform_boundaries() {
        let t = [AffineTransform::identity(); 4];
        let game = ChaosGame::uniform(&t);
        assert_eq!(game.cumulative(), &[0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_select_ties_go_to_lower_index() {
        let t = [AffineTransform::identity(); 4];
        let game = ChaosGame::uniform(&t);
        assert_eq!(game.select(0.0), 0);
        assert_eq!(game.select(0.25), 0);
        assert_eq!(game.select(0.2500001), 1);
        assert_eq!(game.select(0.5), 1);
        assert_eq!(game.select(0.99), 3);
        // Beyond the last boundary still clamps to the last transform.
        assert_eq!(game.select(1.5), 3);
    }

    #[test]
    fn test_weighted_boundaries() {
        let t = [AffineTransform::identity(); 3];
        let game = ChaosGame::with_weights(&t, &[1.0, 3.0, 0.0]);
        assert_relative_eq!(game.cumulative()[0], 0.25);
        assert_relative_eq!(game.cumulative()[1], 1.0);
        assert_relative_eq!(game.cumulative()[2], 1.0);
        assert_eq!(game.select(0.9), 1);

        let fallback = ChaosGame::with_weights(&t, &[]);
        assert_eq!(fallback.cumulative(), ChaosGame::uniform(&t).cumulative());
    }

    #[test]
    fn test_points_settle_inside_attractor_hull() {
        // The Sierpinski attractor above lies within [-1, 1] x [-1, 1].
        let t = sierpinski();
        let game = ChaosGame::uniform(&t);
        let mut rng = StdRng::seed_from_u64(3);
        for p in game.generate(500, &mut rng) {
            assert!(p.x.abs() <= 1.0 + 1e-9 && p.y.abs() <= 1.0 + 1e-9, "{:?}", p);
        }
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let t = sierpinski();
        let game = ChaosGame::uniform(&t);
        let a = game.generate(50, &mut StdRng::seed_from_u64(9));
        let b = game.generate(50, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_batch_is_white_point_cloud() {
        let t = sierpinski();
        let mut rng = StdRng::seed_from_u64(4);
        let batch = ChaosGame::uniform(&t).generate_batch(10, &mut rng);
        assert_eq!(batch.kind, PrimitiveKind::PointCloud);
        assert_eq!(batch.len(), 10);
        assert!(batch.colors.iter().all(|c| *c == ColorRgba::WHITE));
        assert!(!batch.applies_live_projection);
    }
}
