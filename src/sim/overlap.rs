//! Overlap area between two disks
//!
//! The geometric heart of the simulator: how much of the stellar disk does
//! the planet's disk cover? Handles disjoint disks, full containment (with a
//! depth check deciding whether the smaller disk is actually in front) and
//! the general circular-lens case.

use std::f64::consts::PI;

use glam::DVec2;

/// Relationship between two disks on the sky plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapKind {
    /// Centers at least `r1 + r2` apart
    Disjoint,
    /// One disk lies entirely inside the other
    Contained,
    /// Boundaries cross, forming a lens
    Partial,
}

/// Classify two disks by center distance
#[inline]
pub fn classify(d: f64, r1: f64, r2: f64) -> OverlapKind {
    if d >= r1 + r2 {
        OverlapKind::Disjoint
    } else if d <= (r1 - r2).abs() {
        OverlapKind::Contained
    } else {
        OverlapKind::Partial
    }
}

/// Area of `center1`'s disk covered by `center2`'s disk
///
/// `depth_signal` is the line-of-sight coordinate of the second body. It only
/// matters when one disk contains the other: a negative value means the
/// second body is nearer the observer and blocks its full disk, anything
/// else means it sits behind and blocks nothing.
///
/// The partial-overlap branch ignores depth; callers decide visibility before
/// asking for a lens area.
pub fn overlap_area(center1: DVec2, r1: f64, center2: DVec2, depth_signal: f64, r2: f64) -> f64 {
    let d = center1.distance(center2);
    debug_assert!(d.is_finite(), "non-finite center distance {d}");

    match classify(d, r1, r2) {
        OverlapKind::Disjoint => 0.0,
        OverlapKind::Contained => {
            if depth_signal < 0.0 {
                debug_assert!(r2 <= r1, "occluder radius {r2} exceeds occluded radius {r1}");
                // A larger occluder can hide no more than the whole occluded disk
                PI * r2.min(r1).powi(2)
            } else {
                0.0
            }
        }
        OverlapKind::Partial => lens_area(d, r1, r2),
    }
}

/// Area of the lens formed by two crossing circles `d` apart
///
/// Requires `|r1 - r2| < d < r1 + r2`. Arguments that drift out of domain by
/// rounding near either boundary are clamped.
pub fn lens_area(d: f64, r1: f64, r2: f64) -> f64 {
    let (d2, r1_sq, r2_sq) = (d * d, r1 * r1, r2 * r2);

    let cos1 = clamp_unit((d2 + r1_sq - r2_sq) / (2.0 * d * r1));
    let cos2 = clamp_unit((d2 + r2_sq - r1_sq) / (2.0 * d * r2));

    let radicand = (-d + r1 + r2) * (d + r1 - r2) * (d - r1 + r2) * (d + r1 + r2);
    let radicand = if radicand < 0.0 {
        log::trace!("lens radicand {radicand:e} clamped to 0 (d={d}, r1={r1}, r2={r2})");
        0.0
    } else {
        radicand
    };

    let area = r1_sq * cos1.acos() + r2_sq * cos2.acos() - 0.5 * radicand.sqrt();
    // Rounding can leave a hair below zero; NaN from bad input passes through
    if area < 0.0 { 0.0 } else { area }
}

/// Clamp an `acos` argument into [-1, 1]
#[inline]
fn clamp_unit(value: f64) -> f64 {
    if !(-1.0..=1.0).contains(&value) {
        log::trace!("acos argument {value} clamped to [-1, 1]");
    }
    value.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_disjoint_is_zero() {
        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::new(11.0, 0.0), -1.0, 1.0);
        assert_eq!(area, 0.0);

        // Tangent from outside
        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::new(0.0, 11.0), -1.0, 1.0);
        assert_eq!(area, 0.0);
    }

    #[test]
    fn test_contained_in_front() {
        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::ZERO, -1.0, 1.0);
        assert!((area - PI).abs() < EPS);

        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::new(3.0, -4.0), -50.0, 2.0);
        assert!((area - 4.0 * PI).abs() < EPS);
    }

    #[test]
    fn test_contained_behind_blocks_nothing() {
        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::ZERO, 1.0, 1.0);
        assert_eq!(area, 0.0);

        // Zero depth counts as behind
        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::new(2.0, 2.0), 0.0, 1.0);
        assert_eq!(area, 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds occluded radius")]
    fn test_larger_occluder_rejected_in_debug() {
        overlap_area(DVec2::ZERO, 1.0, DVec2::ZERO, -1.0, 10.0);
    }

    #[test]
    fn test_larger_occluder_behind_is_zero() {
        // Depth resolves first; the size check only guards the blocking branch
        let area = overlap_area(DVec2::ZERO, 1.0, DVec2::ZERO, 1.0, 10.0);
        assert_eq!(area, 0.0);
    }

    #[test]
    fn test_lens_propagates_nan() {
        assert!(lens_area(f64::NAN, 10.0, 1.0).is_nan());
        assert!(lens_area(10.0, f64::NAN, 1.0).is_nan());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-finite center distance")]
    fn test_non_finite_center_rejected_in_debug() {
        overlap_area(DVec2::ZERO, 10.0, DVec2::new(f64::INFINITY, 0.0), -1.0, 1.0);
    }

    #[test]
    fn test_equal_disks_half_offset() {
        // Two unit circles one radius apart: 2π/3 - √3/2
        let area = overlap_area(DVec2::ZERO, 1.0, DVec2::new(1.0, 0.0), -1.0, 1.0);
        let expected = 2.0 * PI / 3.0 - 3f64.sqrt() / 2.0;
        assert!((area - expected).abs() < EPS);
    }

    #[test]
    fn test_small_disk_centered_on_limb() {
        // A tiny disk centered on a huge circle's edge is covered roughly by half
        let area = overlap_area(DVec2::ZERO, 1000.0, DVec2::new(1000.0, 0.0), -1.0, 1.0);
        assert!((area - PI / 2.0).abs() < 2e-3);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(11.0, 10.0, 1.0), OverlapKind::Disjoint);
        assert_eq!(classify(9.0, 10.0, 1.0), OverlapKind::Contained);
        assert_eq!(classify(10.0, 10.0, 1.0), OverlapKind::Partial);
        assert_eq!(classify(0.0, 5.0, 5.0), OverlapKind::Contained);
    }

    #[test]
    fn test_lens_continuous_at_outer_tangent() {
        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::new(11.0 - 1e-12, 0.0), -1.0, 1.0);
        assert!(area.is_finite());
        assert!(area >= 0.0 && area < 1e-4);
    }

    #[test]
    fn test_lens_continuous_at_inner_tangent() {
        let area = overlap_area(DVec2::ZERO, 10.0, DVec2::new(9.0 + 1e-12, 0.0), -1.0, 1.0);
        assert!(area.is_finite());
        assert!((area - PI).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_disjoint_always_zero(
            r1 in 0.1f64..50.0,
            r2 in 0.1f64..50.0,
            extra in 0.0f64..100.0,
            angle in 0.0f64..std::f64::consts::TAU,
            depth in -100.0f64..100.0,
        ) {
            let d = r1 + r2 + extra;
            let c2 = DVec2::new(d * angle.cos(), d * angle.sin());
            // Rounding in the polar offset can pull the center inside by an ulp
            prop_assume!(c2.length() >= r1 + r2);
            prop_assert_eq!(overlap_area(DVec2::ZERO, r1, c2, depth, r2), 0.0);
        }

        #[test]
        fn prop_area_bounded_by_smaller_disk(
            r1 in 0.5f64..50.0,
            ratio in 0.01f64..0.99,
            x in -60.0f64..60.0,
            y in -60.0f64..60.0,
        ) {
            let r2 = r1 * ratio;
            let area = overlap_area(DVec2::ZERO, r1, DVec2::new(x, y), -1.0, r2);
            prop_assert!(area >= 0.0);
            prop_assert!(area <= PI * r2 * r2 + 1e-6);
        }

        #[test]
        fn prop_partial_overlap_decreases_with_distance(
            r1 in 5.0f64..20.0,
            ratio in 0.05f64..0.9,
            t1 in 0.01f64..0.98,
            gap in 0.005f64..0.5,
        ) {
            let r2 = r1 * ratio;
            let lo = r1 - r2;
            let hi = r1 + r2;
            let t2 = (t1 + gap).min(0.99);
            prop_assume!(t2 - t1 > 1e-3);
            let d1 = lo + t1 * (hi - lo);
            let d2 = lo + t2 * (hi - lo);

            let a1 = overlap_area(DVec2::ZERO, r1, DVec2::new(d1, 0.0), -1.0, r2);
            let a2 = overlap_area(DVec2::ZERO, r1, DVec2::new(d2, 0.0), -1.0, r2);
            prop_assert!(a1 > a2, "area({d1}) = {a1} should exceed area({d2}) = {a2}");
        }
    }
}
