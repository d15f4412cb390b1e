//! Error types for sprout-grid.

use thiserror::Error;

/// Errors raised when building fields or grids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// One of the requested dimensions is zero.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// `width * height` overflows `usize`.
    #[error("grid dimensions {width}x{height} exceed the addressable cell count")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Raw cell data does not match the declared dimensions.
    #[error("dimension mismatch: expected {expected} cells, got {got}")]
    DimensionMismatch {
        /// Number of cells the dimensions require.
        expected: usize,
        /// Number of cells actually supplied.
        got: usize,
    },
}
