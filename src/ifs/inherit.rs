//! By-level color inheritance.
//!
//! Each branch of the recursion tints its child toward one or two primary
//! channels. Which channels a branch index boosts is fixed for the whole
//! session by an offset rolled once at startup.

use rand::Rng;

use crate::geometry::ColorRgba;

/// How far a boosted channel moves toward 1.0 per generation
pub const COLOR_MIX_FACTOR: f64 = 0.4;

/// Number of distinct channel-mixing rules
pub const COLOR_RULES: u8 = 6;

/// Roll the session's branch-to-rule offset, uniform over `0..6`
pub fn random_color_offset<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..COLOR_RULES)
}

#[inline]
fn boost(channel: f64) -> f64 {
    channel * (1.0 - COLOR_MIX_FACTOR) + COLOR_MIX_FACTOR
}

/// Color of the child reached through `branch` from a parent of `parent`
/// color. Alpha is carried over unchanged.
pub fn derive_child_color(parent: ColorRgba, branch: usize, offset: u8) -> ColorRgba {
    let ColorRgba { mut r, mut g, mut b, a } = parent;
    match (branch + offset as usize) % COLOR_RULES as usize {
        0 => r = boost(r),
        1 => g = boost(g),
        2 => b = boost(b),
        3 => {
            r = boost(r);
            g = boost(g);
        }
        4 => {
            r = boost(r);
            b = boost(b);
        }
        _ => {
            g = boost(g);
            b = boost(b);
        }
    }
    ColorRgba::new(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    const BASE: ColorRgba = ColorRgba::new(0.2, 0.2, 0.2, 0.5);
    const BOOSTED: f64 = 0.2 * 0.6 + 0.4;

    #[test_case(0, [true, false, false] ; "rule 0 boosts red")]
    #[test_case(1, [false, true, false] ; "rule 1 boosts green")]
    #[test_case(2, [false, false, true] ; "rule 2 boosts blue")]
    #[test_case(3, [true, true, false] ; "rule 3 boosts red and green")]
    #[test_case(4, [true, false, true] ; "rule 4 boosts red and blue")]
    #[test_case(5, [false, true, true] ; "rule 5 boosts green and blue")]
    fn test_rule_channels(rule: usize, boosted: [bool; 3]) {
        let child = derive_child_color(BASE, rule, 0);
        let expect = |on: bool| if on { BOOSTED } else { 0.2 };
        assert_relative_eq!(child.r, expect(boosted[0]));
        assert_relative_eq!(child.g, expect(boosted[1]));
        assert_relative_eq!(child.b, expect(boosted[2]));
        assert_eq!(child.a, BASE.a);
    }

    #[test]
    fn test_offset_shifts_rule_selection() {
        // Branch 1 with offset 2 uses rule 3.
        assert_eq!(derive_child_color(BASE, 1, 2), derive_child_color(BASE, 3, 0));
        // Wraps around after six rules.
        assert_eq!(derive_child_color(BASE, 4, 5), derive_child_color(BASE, 3, 0));
        assert_eq!(derive_child_color(BASE, 6, 0), derive_child_color(BASE, 0, 0));
    }

    #[test]
    fn test_deterministic_and_alpha_preserving() {
        for offset in 0..COLOR_RULES {
            for branch in 0..10 {
                let first = derive_child_color(BASE, branch, offset);
                let second = derive_child_color(BASE, branch, offset);
                assert_eq!(first, second);
                assert_eq!(first.a, 0.5);
            }
        }
    }

    #[test]
    fn test_white_is_a_fixed_point() {
        for rule in 0..6 {
            let child = derive_child_color(ColorRgba::WHITE, rule, 0);
            assert_relative_eq!(child.r, 1.0);
            assert_relative_eq!(child.g, 1.0);
            assert_relative_eq!(child.b, 1.0);
        }
    }

    #[test]
    fn test_random_offset_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(random_color_offset(&mut rng) < COLOR_RULES);
        }
    }
}
