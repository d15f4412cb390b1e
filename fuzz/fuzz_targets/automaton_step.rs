#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_sprout_automata::{AutomatonEngine, Edges};
use rhizome_sprout_grid::{BoolGrid, Dimensions};

fuzz_target!(|data: &[u8]| {
    let Some((&shape, bits)) = data.split_first() else {
        return;
    };
    let width = usize::from(shape & 0x0f) + 1;
    let height = usize::from(shape >> 4) + 1;
    let Ok(dims) = Dimensions::new(width, height) else {
        return;
    };
    let grid = BoolGrid::from_fn(dims, |x, y| {
        let i = dims.index(x, y);
        bits.get(i / 8).is_some_and(|b| b & (1 << (i % 8)) != 0)
    });

    for edges in [Edges::Dead, Edges::Wrap] {
        let engine = AutomatonEngine::life().with_edges(edges);
        let next = engine.step(&grid);
        assert_eq!(next.dimensions(), dims);
    }
});
