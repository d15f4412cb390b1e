#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_sprout_grid::{Dimensions, ScalarField};
use rhizome_sprout_procgen::{mirror, smooth, threshold};

fuzz_target!(|data: &[u8]| {
    let [w, h, radius, cutoff, rest @ ..] = data else {
        return;
    };
    let Ok(dims) = Dimensions::new(usize::from(*w % 32) + 1, usize::from(*h % 32) + 1) else {
        return;
    };
    let field = ScalarField::from_fn(dims, |x, y| {
        let i = dims.index(x, y);
        rest.get(i).map_or(0.0, |&b| f32::from(b) / 255.0)
    });

    let smoothed = smooth(&field, usize::from(*radius % 6));
    let mirrored = mirror(&smoothed);
    let grid = threshold(&mirrored, f32::from(*cutoff) / 255.0);
    assert_eq!(grid.dimensions(), dims);
});
