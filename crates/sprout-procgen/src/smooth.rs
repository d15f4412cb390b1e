//! Weighted local averaging.
//!
//! Every cell becomes the weighted sum of the cells within Chebyshev
//! distance `radius`, divided by the full kernel area `(2r + 1)^2`. The
//! divisor does not shrink at the borders, so edge and corner cells come out
//! darker than interior cells with the same neighborhood values. Generated
//! layouts depend on that falloff; keep it.

use rhizome_sprout_grid::ScalarField;

use crate::build_field;

/// Kernel weight for offset `(i, j)`: 1 at the center, falling linearly to
/// zero one ring beyond `radius`.
pub fn smoothing_weight(i: isize, j: isize, radius: usize) -> f32 {
    let ring = i.unsigned_abs().max(j.unsigned_abs());
    1.0 - ring as f32 / (radius as f32 + 1.0)
}

/// Returns a smoothed copy of `field`. A radius of 0 returns an exact copy.
///
/// Work per cell is bounded by the field size, not the radius.
pub fn smooth(field: &ScalarField, radius: usize) -> ScalarField {
    if radius == 0 {
        return field.clone();
    }

    let dims = field.dimensions();
    let r = isize::try_from(radius).unwrap_or(isize::MAX);
    let span = 2.0 * radius as f64 + 1.0;
    let area = (span * span) as f32;

    let width = dims.width() as isize;
    let height = dims.height() as isize;

    build_field(dims, |x, y| {
        let (x, y) = (x as isize, y as isize);
        let mut sum = 0.0;
        for i in (-r).max(-x)..=r.min(width - 1 - x) {
            for j in (-r).max(-y)..=r.min(height - 1 - y) {
                let value = field.get((x + i) as usize, (y + j) as usize);
                sum += value * smoothing_weight(i, j, radius);
            }
        }
        sum / area
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhizome_sprout_grid::Dimensions;

    fn dims(w: usize, h: usize) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn test_weights() {
        assert_eq!(smoothing_weight(0, 0, 2), 1.0);
        assert!((smoothing_weight(1, -1, 2) - 2.0 / 3.0).abs() < 1e-6);
        assert!((smoothing_weight(-2, 0, 2) - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(smoothing_weight(0, 0, 0), 1.0);
    }

    #[test]
    fn test_radius_zero_is_identity() {
        let field = ScalarField::from_fn(dims(5, 4), |x, y| (x * 7 + y * 3) as f32 / 40.0);
        assert_eq!(smooth(&field, 0), field);
    }

    #[test]
    fn test_interior_of_constant_field() {
        // Radius 1: center 1 + eight neighbors at 1/2 = 5, over an area of 9.
        let field = ScalarField::filled(dims(5, 5), 0.9);
        let out = smooth(&field, 1);
        assert!((out.get(2, 2) - 0.9 * 5.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn test_edges_darken() {
        let field = ScalarField::filled(dims(5, 5), 1.0);
        let out = smooth(&field, 1);

        // Corner: center + 3 neighbors = 1 + 1.5.
        assert!((out.get(0, 0) - 2.5 / 9.0).abs() < 1e-6);
        // Edge: center + 5 neighbors = 1 + 2.5.
        assert!((out.get(2, 0) - 3.5 / 9.0).abs() < 1e-6);
        // Interior.
        assert!((out.get(2, 2) - 5.0 / 9.0).abs() < 1e-6);

        assert!(out.get(0, 0) < out.get(2, 0));
        assert!(out.get(2, 0) < out.get(2, 2));
    }

    #[test]
    fn test_single_impulse_spreads_by_weight() {
        let mut field = ScalarField::new(dims(7, 7));
        field.set(3, 3, 1.0);
        let out = smooth(&field, 2);

        let area = 25.0;
        assert!((out.get(3, 3) - 1.0 / area).abs() < 1e-6);
        assert!((out.get(4, 2) - (2.0 / 3.0) / area).abs() < 1e-6);
        assert!((out.get(5, 3) - (1.0 / 3.0) / area).abs() < 1e-6);
        assert_eq!(out.get(6, 3), 0.0);
    }

    #[test]
    fn test_radius_larger_than_field() {
        let field = ScalarField::filled(dims(2, 1), 1.0);
        let out = smooth(&field, 3);
        assert_eq!(out.dimensions(), field.dimensions());
        // Each cell sees itself at weight 1 and its neighbor on ring 1 at 3/4.
        let expected = (1.0 + 0.75) / 49.0;
        assert!((out.get(0, 0) - expected).abs() < 1e-6);
        assert!((out.get(1, 0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_huge_radius_small_field() {
        let field = ScalarField::filled(dims(1, 1), 1.0);
        let out = smooth(&field, 40_000);
        let span = 80_001.0f64;
        assert!((out.get(0, 0) as f64 - 1.0 / (span * span)).abs() < 1e-12);

        let out = smooth(&ScalarField::filled(dims(3, 2), 0.5), usize::MAX);
        assert_eq!(out.dimensions(), dims(3, 2));
        assert!(out.values().iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn test_stays_in_unit_range() {
        let field = ScalarField::from_fn(dims(9, 9), |x, y| ((x ^ y) % 2) as f32);
        let out = smooth(&field, 2);
        let (lo, hi) = out.min_max();
        assert!(lo >= 0.0 && hi <= 1.0);
    }
}
