//! Boolean cell grids.

use crate::{Dimensions, GridError};

/// A width x height matrix of alive (`true`) / dead (`false`) cells.
///
/// Reads outside the grid return dead and writes outside the grid are
/// ignored, so interactive callers can forward pointer positions without
/// clamping them first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoolGrid {
    /// Cell states (row-major order).
    cells: Vec<bool>,
    dims: Dimensions,
}

impl BoolGrid {
    /// Creates a grid with every cell dead.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            cells: vec![false; dims.len()],
            dims,
        }
    }

    /// Creates a grid from existing row-major data.
    pub fn from_vec(dims: Dimensions, cells: Vec<bool>) -> Result<Self, GridError> {
        if cells.len() != dims.len() {
            return Err(GridError::DimensionMismatch {
                expected: dims.len(),
                got: cells.len(),
            });
        }
        Ok(Self { cells, dims })
    }

    /// Creates a grid with the listed `(x, y)` cells alive.
    ///
    /// Positions outside the grid are skipped.
    pub fn from_cells(dims: Dimensions, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(dims);
        for &(x, y) in alive {
            grid.set(x, y, true);
        }
        grid
    }

    /// Creates a grid by evaluating `f(x, y)` at every cell.
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(dims.len());
        for y in 0..dims.height() {
            for x in 0..dims.width() {
                cells.push(f(x, y));
            }
        }
        Self { cells, dims }
    }

    /// Returns the dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Returns the width.
    pub fn width(&self) -> usize {
        self.dims.width()
    }

    /// Returns the height.
    pub fn height(&self) -> usize {
        self.dims.height()
    }

    /// Gets the state of a cell. Cells outside the grid are dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.dims.contains(x, y) && self.cells[self.dims.index(x, y)]
    }

    /// Sets the state of a cell. Ignored outside the grid.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if self.dims.contains(x, y) {
            let i = self.dims.index(x, y);
            self.cells[i] = alive;
        }
    }

    /// Flips the state of a cell. Ignored outside the grid.
    pub fn toggle(&mut self, x: usize, y: usize) {
        if self.dims.contains(x, y) {
            let i = self.dims.index(x, y);
            self.cells[i] = !self.cells[i];
        }
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Returns the raw cell data.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Returns mutable access to the raw cell data.
    pub fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// Counts alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterates over the `(x, y)` positions of alive cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(i, _)| self.dims.coords(i))
    }
}

impl std::fmt::Display for BoolGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.dims.width()) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
