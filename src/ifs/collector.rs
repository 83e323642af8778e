//! Committed clone projections.

use crate::geometry::AffineTransform;

use super::IfsCode;

/// Maximum number of clones (and therefore IFS transforms)
pub const MAX_TRANSFORMS: usize = 10;

/// Ordered list of committed transforms, capped at [`MAX_TRANSFORMS`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformCollector {
    transforms: Vec<AffineTransform>,
}

impl TransformCollector {
    pub fn new() -> Self {
        Self {
            transforms: Vec::with_capacity(MAX_TRANSFORMS),
        }
    }

    pub fn reset(&mut self) {
        self.transforms.clear();
    }

    /// Store a copy of `transform`.
    ///
    /// Returns `false` and leaves the collector untouched once it is full.
    pub fn commit(&mut self, transform: &AffineTransform) -> bool {
        if self.is_full() {
            return false;
        }
        self.transforms.push(transform.deep_copy());
        true
    }

    pub fn last(&self) -> Option<AffineTransform> {
        self.transforms.last().copied()
    }

    pub fn all(&self) -> &[AffineTransform] {
        &self.transforms
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.transforms.len() >= MAX_TRANSFORMS
    }

    /// Selection probability of each transform; always uniform.
    pub fn probability_weights(&self) -> Vec<f64> {
        let n = self.transforms.len();
        vec![1.0 / n as f64; n]
    }

    /// The IFS code table, one row per transform
    pub fn ifs_codes(&self) -> Vec<IfsCode> {
        self.transforms
            .iter()
            .zip(self.probability_weights())
            .map(|(t, weight)| IfsCode::new(t, weight))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_caps_at_ten() {
        let mut collector = TransformCollector::new();
        for i in 0..25 {
            let accepted = collector.commit(&AffineTransform::translate(i as f64, 0.0));
            assert_eq!(accepted, i < MAX_TRANSFORMS);
            assert!(collector.len() <= MAX_TRANSFORMS);
        }
        assert!(collector.is_full());
        assert_eq!(collector.last(), Some(AffineTransform::translate(9.0, 0.0)));
    }

    #[test]
    fn test_reset_empties() {
        let mut collector = TransformCollector::new();
        collector.commit(&AffineTransform::identity());
        collector.reset();
        assert!(collector.is_empty());
        assert!(collector.last().is_none());
        assert!(collector.probability_weights().is_empty());
    }

    #[test]
    fn test_weights_are_uniform() {
        let mut collector = TransformCollector::new();
        collector.commit(&AffineTransform::scale(0.9, 0.9));
        collector.commit(&AffineTransform::scale(0.1, 0.1));
        collector.commit(&AffineTransform::identity());
        collector.commit(&AffineTransform::rotate(45.0));

        assert_eq!(collector.probability_weights(), vec![0.25; 4]);
    }

    #[test]
    fn test_stored_transform_is_a_copy() {
        let mut live = AffineTransform::translate(0.01, 0.01);
        let mut collector = TransformCollector::new();
        collector.commit(&live);

        live.pre_multiply(&AffineTransform::rotate(30.0));
        assert_eq!(collector.all()[0], AffineTransform::translate(0.01, 0.01));
    }
}
