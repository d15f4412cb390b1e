//! Generation stepping.

use rhizome_sprout_grid::BoolGrid;

use crate::Rule;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Offsets of the 8 cells surrounding a cell, row by row.
const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// How neighbors past the grid border are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Edges {
    /// Cells outside the grid are dead. A corner cell has 3 real neighbors.
    #[default]
    Dead,
    /// Opposite borders are adjacent (toroidal topology).
    ///
    /// On grids narrower than 3 cells several offsets land on the same cell;
    /// each distinct cell other than the center is counted once.
    Wrap,
}

/// Advances a [`BoolGrid`] one generation at a time.
///
/// [`AutomatonEngine::step`] never writes to the grid it reads. Each call
/// counts neighbors in the previous generation only and writes the result
/// into a freshly allocated grid, so the order cells are visited in cannot
/// change the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutomatonEngine {
    rule: Rule,
    edges: Edges,
}

impl AutomatonEngine {
    /// Game of Life (B3/S23) with dead edges.
    pub fn life() -> Self {
        Self::new(Rule::LIFE)
    }

    /// Engine with a custom rule and dead edges.
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            edges: Edges::Dead,
        }
    }

    /// Sets the edge handling.
    pub fn with_edges(mut self, edges: Edges) -> Self {
        self.edges = edges;
        self
    }

    /// Returns the rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Returns the edge handling.
    pub fn edges(&self) -> Edges {
        self.edges
    }

    /// Counts live Moore neighbors of `(x, y)` in `grid`.
    pub fn count_neighbors(&self, grid: &BoolGrid, x: usize, y: usize) -> u8 {
        match self.edges {
            Edges::Dead => count_bounded(grid, x, y),
            Edges::Wrap => count_wrapped(grid, x, y),
        }
    }

    /// Computes the next generation into a new grid.
    #[cfg(not(feature = "parallel"))]
    pub fn step(&self, grid: &BoolGrid) -> BoolGrid {
        BoolGrid::from_fn(grid.dimensions(), |x, y| self.next_cell(grid, x, y))
    }

    /// Computes the next generation into a new grid, one row per task.
    #[cfg(feature = "parallel")]
    pub fn step(&self, grid: &BoolGrid) -> BoolGrid {
        use rayon::prelude::*;

        let mut next = BoolGrid::new(grid.dimensions());
        next.cells_mut()
            .par_chunks_mut(grid.width())
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    *cell = self.next_cell(grid, x, y);
                }
            });
        next
    }

    /// Advances `n` generations. `n == 0` returns a copy.
    pub fn steps(&self, grid: &BoolGrid, n: usize) -> BoolGrid {
        let mut current = grid.clone();
        for _ in 0..n {
            current = self.step(&current);
        }
        current
    }

    #[inline]
    fn next_cell(&self, grid: &BoolGrid, x: usize, y: usize) -> bool {
        self.rule
            .next_state(grid.get(x, y), self.count_neighbors(grid, x, y))
    }
}

fn count_bounded(grid: &BoolGrid, x: usize, y: usize) -> u8 {
    let width = grid.width() as isize;
    let height = grid.height() as isize;
    let (x, y) = (x as isize, y as isize);

    let mut count = 0;
    for (dx, dy) in MOORE {
        let (nx, ny) = (x + dx, y + dy);
        if nx < 0 || nx >= width || ny < 0 || ny >= height {
            continue;
        }
        if grid.get(nx as usize, ny as usize) {
            count += 1;
        }
    }
    count
}

fn count_wrapped(grid: &BoolGrid, x: usize, y: usize) -> u8 {
    let width = grid.width() as isize;
    let height = grid.height() as isize;

    let mut seen = [(x, y); 8];
    let mut distinct = 0;
    let mut count = 0;
    for (dx, dy) in MOORE {
        let nx = (x as isize + dx).rem_euclid(width) as usize;
        let ny = (y as isize + dy).rem_euclid(height) as usize;
        if (nx, ny) == (x, y) || seen[..distinct].contains(&(nx, ny)) {
            continue;
        }
        seen[distinct] = (nx, ny);
        distinct += 1;
        if grid.get(nx, ny) {
            count += 1;
        }
    }
    count
}
