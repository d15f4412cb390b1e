//! Binarization.

use rhizome_sprout_grid::{BoolGrid, ScalarField};

/// Cells strictly greater than `cutoff` are alive; a cell equal to the
/// cutoff is dead.
pub fn threshold(field: &ScalarField, cutoff: f32) -> BoolGrid {
    BoolGrid::from_fn(field.dimensions(), |x, y| field.get(x, y) > cutoff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhizome_sprout_grid::Dimensions;

    #[test]
    fn test_strict_comparison() {
        let dims = Dimensions::new(3, 1).unwrap();
        let field = ScalarField::from_vec(dims, vec![0.4, 0.5, 0.6]).unwrap();
        let grid = threshold(&field, 0.5);

        assert!(!grid.get(0, 0));
        assert!(!grid.get(1, 0), "value equal to cutoff must be dead");
        assert!(grid.get(2, 0));
    }

    #[test]
    fn test_extreme_cutoffs() {
        let dims = Dimensions::new(4, 4).unwrap();
        let field = ScalarField::from_fn(dims, |x, y| (x + y) as f32 / 6.0);

        assert_eq!(threshold(&field, 1.0).population(), 0);
        // Only the (0, 0) sample equals 0.0.
        assert_eq!(threshold(&field, 0.0).population(), 15);
        assert_eq!(threshold(&field, -0.1).population(), 16);
    }

    #[test]
    fn test_keeps_dimensions() {
        let dims = Dimensions::new(7, 2).unwrap();
        let grid = threshold(&ScalarField::new(dims), 0.5);
        assert_eq!(grid.dimensions(), dims);
    }
}
