//! Reflection across the horizontal midline.

use rhizome_sprout_grid::ScalarField;

use crate::build_field;

/// Returns a copy of `field` whose lower half (rows `y >= height / 2`) is the
/// reflection of the upper half.
///
/// For odd heights the middle row maps onto itself.
pub fn mirror(field: &ScalarField) -> ScalarField {
    let height = field.height();
    let half = height / 2;
    build_field(field.dimensions(), |x, y| {
        if y >= half {
            field.get(x, height - 1 - y)
        } else {
            field.get(x, y)
        }
    })
}
