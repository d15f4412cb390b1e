//! Grids shared by the sprout generation pipeline and automaton.
//!
//! Every buffer in a simulation has the same [`Dimensions`]. Scalar stages
//! work on [`ScalarField`]s, the automaton works on [`BoolGrid`]s. Both are
//! stored row-major with `(0, 0)` at the first element.
//!
//! # Example
//!
//! ```
//! use rhizome_sprout_grid::{BoolGrid, Dimensions};
//!
//! let dims = Dimensions::new(5, 5).unwrap();
//! let mut grid = BoolGrid::new(dims);
//! grid.set(2, 2, true);
//! grid.toggle(3, 2);
//!
//! assert_eq!(grid.population(), 2);
//!
//! // Out of range edits are ignored.
//! grid.set(10, 10, true);
//! assert!(!grid.get(10, 10));
//! ```

mod error;
mod field;
mod grid;

pub use error::GridError;
pub use field::ScalarField;
pub use grid::BoolGrid;

use glam::IVec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width and height of a field or grid. Both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDimensions"))]
pub struct Dimensions {
    width: usize,
    height: usize,
}

/// Unvalidated form used when deserializing.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawDimensions {
    width: usize,
    height: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDimensions> for Dimensions {
    type Error = GridError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl Dimensions {
    /// Creates dimensions, rejecting a zero width or height and a cell count
    /// that does not fit in `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        if width.checked_mul(height).is_none() {
            return Err(GridError::TooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    /// Returns the width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Always false; dimensions are never zero.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if `(x, y)` lies inside the grid.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns true if a signed position lies inside the grid.
    pub fn contains_signed(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && self.contains(pos.x as usize, pos.y as usize)
    }

    /// Row-major index of `(x, y)`. Callers check bounds first.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Inverse of [`Dimensions::index`].
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
