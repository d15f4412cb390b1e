//! Hooks for the presentation layer.

use rhizome_sprout_grid::BoolGrid;

/// Receives the current grid whenever it changes.
///
/// Renderers implement this to redraw; the simulation never holds any
/// presentation state itself.
pub trait GridObserver {
    /// Called after initialization, after every step and after every
    /// accepted edit.
    fn on_grid_changed(&mut self, grid: &BoolGrid, generation: u64);
}

impl<F: FnMut(&BoolGrid, u64)> GridObserver for F {
    fn on_grid_changed(&mut self, grid: &BoolGrid, generation: u64) {
        self(grid, generation)
    }
}
