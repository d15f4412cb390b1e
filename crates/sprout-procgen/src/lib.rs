//! Procedural generation of initial sprout grids.
//!
//! A grid is built in four stages, each returning a fresh buffer:
//!
//! 1. [`NoiseField::sample`] bakes coherent noise into a [`ScalarField`].
//! 2. [`smooth`] (optional) takes a distance-weighted local average.
//! 3. [`mirror`] reflects the upper half onto the lower half.
//! 4. [`threshold`] turns the field into a [`BoolGrid`].
//!
//! [`ProceduralGenerator`] runs the stages from a [`GenerationConfig`].
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use rhizome_sprout_procgen::{GenerationConfig, ProceduralGenerator};
//!
//! let config = GenerationConfig::new(32, 32)
//!     .with_offset(Vec2::new(4.0, 9.5))
//!     .with_smoothing(1)
//!     .with_threshold(0.3);
//!
//! let mut generator = ProceduralGenerator::seeded(7);
//! let grid = generator.generate(&config).unwrap();
//! assert_eq!(grid.width(), 32);
//! ```
//!
//! [`ScalarField`]: rhizome_sprout_grid::ScalarField
//! [`BoolGrid`]: rhizome_sprout_grid::BoolGrid

mod config;
mod error;
mod generator;
mod noise_field;
mod offset;
mod smooth;
mod symmetry;
mod threshold;

pub use config::GenerationConfig;
pub use error::GenerationError;
pub use generator::{ProceduralGenerator, Stages, generate};
pub use noise_field::NoiseField;
pub use offset::{FixedOffset, OffsetSource, RngOffset};
pub use smooth::{smooth, smoothing_weight};
pub use symmetry::mirror;
pub use threshold::threshold;

use rhizome_sprout_grid::{Dimensions, ScalarField};

/// Builds a field by evaluating `f(x, y)` for every cell, one row per task
/// when the `parallel` feature is enabled.
#[cfg(not(feature = "parallel"))]
pub(crate) fn build_field(dims: Dimensions, f: impl Fn(usize, usize) -> f32 + Sync) -> ScalarField {
    ScalarField::from_fn(dims, f)
}

#[cfg(feature = "parallel")]
pub(crate) fn build_field(dims: Dimensions, f: impl Fn(usize, usize) -> f32 + Sync) -> ScalarField {
    use rayon::prelude::*;

    let mut field = ScalarField::new(dims);
    field
        .values_mut()
        .par_chunks_mut(dims.width())
        .enumerate()
        .for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                *value = f(x, y);
            }
        });
    field
}

#[cfg(all(test, feature = "parallel"))]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_field_matches_serial() {
        let dims = Dimensions::new(41, 17).unwrap();
        let f = |x: usize, y: usize| ((x * 31 + y * 17) % 13) as f32 / 13.0;
        assert_eq!(build_field(dims, f), ScalarField::from_fn(dims, f));

        let noise = ScalarField::from_fn(dims, f);
        let serial_smooth = ScalarField::from_fn(dims, |x, y| {
            let (x, y) = (x as isize, y as isize);
            let mut sum = 0.0;
            for i in -2isize..=2 {
                for j in -2isize..=2 {
                    let (nx, ny) = (x + i, y + j);
                    if nx >= 0 && ny >= 0 && (nx as usize) < 41 && (ny as usize) < 17 {
                        sum += noise.get(nx as usize, ny as usize) * smoothing_weight(i, j, 2);
                    }
                }
            }
            sum / 25.0
        });
        assert_eq!(smooth(&noise, 2), serial_smooth);
    }
}
