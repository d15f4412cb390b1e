//! Scalar fields.

use crate::{Dimensions, GridError};

/// A width x height matrix of `f32` samples.
///
/// Values produced by the generation pipeline stay in `[0, 1]`; nothing here
/// enforces that.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    /// Sample values (row-major order).
    values: Vec<f32>,
    dims: Dimensions,
}

impl ScalarField {
    /// Creates a field with every sample set to zero.
    pub fn new(dims: Dimensions) -> Self {
        Self::filled(dims, 0.0)
    }

    /// Creates a field with every sample set to `value`.
    pub fn filled(dims: Dimensions, value: f32) -> Self {
        Self {
            values: vec![value; dims.len()],
            dims,
        }
    }

    /// Creates a field from existing row-major data.
    pub fn from_vec(dims: Dimensions, values: Vec<f32>) -> Result<Self, GridError> {
        if values.len() != dims.len() {
            return Err(GridError::DimensionMismatch {
                expected: dims.len(),
                got: values.len(),
            });
        }
        Ok(Self { values, dims })
    }

    /// Creates a field by evaluating `f(x, y)` at every cell.
    pub fn from_fn(dims: Dimensions, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut values = Vec::with_capacity(dims.len());
        for y in 0..dims.height() {
            for x in 0..dims.width() {
                values.push(f(x, y));
            }
        }
        Self { values, dims }
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

    /// Gets the sample at `(x, y)`, or 0.0 outside the field.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        if self.dims.contains(x, y) {
            self.values[self.dims.index(x, y)]
        } else {
            0.0
        }
    }

    /// Sets the sample at `(x, y)`. Ignored outside the field.
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        if self.dims.contains(x, y) {
            let i = self.dims.index(x, y);
            self.values[i] = value;
        }
    }

    /// Returns the raw sample data.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns mutable access to the raw sample data.
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Returns a new field with `f` applied to every sample.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            values: self.values.iter().map(|&v| f(v)).collect(),
            dims: self.dims,
        }
    }

    /// Returns the smallest and largest sample.
    pub fn min_max(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Mean of all samples.
    pub fn mean(&self) -> f32 {
        self.values.iter().sum::<f32>() / self.values.len() as f32
    }
}
