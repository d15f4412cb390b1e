//! Sampling coherent noise into a scalar field.

use glam::Vec2;
use rhizome_sprout_grid::{Dimensions, ScalarField};
use rhizome_sprout_noise::{Noise2D, Perlin2D};

use crate::build_field;

/// Bakes a [`Noise2D`] function into grid-sized [`ScalarField`]s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoiseField<N = Perlin2D> {
    noise: N,
}

impl<N: Noise2D> NoiseField<N> {
    /// Wraps a noise function.
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    /// Returns the wrapped noise function.
    pub fn noise(&self) -> &N {
        &self.noise
    }

    /// Samples one value per cell.
    ///
    /// Cell `(x, y)` reads the noise at
    /// `(offset.x + x / width * scale, offset.y + y / height * scale)`, so
    /// `scale` is the number of noise units spanned by the grid along each
    /// axis.
    pub fn sample(&self, dims: Dimensions, scale: f32, offset: Vec2) -> ScalarField
    where
        N: Sync,
    {
        let width = dims.width() as f32;
        let height = dims.height() as f32;
        build_field(dims, |x, y| {
            self.noise.sample(
                offset.x + x as f32 / width * scale,
                offset.y + y as f32 / height * scale,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: usize, h: usize) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn test_sample_matches_noise_coordinates() {
        let noise = Perlin2D::with_seed(5);
        let field = NoiseField::new(noise).sample(dims(8, 4), 3.0, Vec2::new(10.5, 2.25));

        assert_eq!(field.dimensions(), dims(8, 4));
        for y in 0..4 {
            for x in 0..8 {
                let expected = noise.sample(10.5 + x as f32 / 8.0 * 3.0, 2.25 + y as f32 / 4.0 * 3.0);
                assert_eq!(field.get(x, y), expected);
            }
        }
    }

    #[test]
    fn test_sample_is_reproducible() {
        let source = NoiseField::new(Perlin2D::new());
        let a = source.sample(dims(16, 16), 4.0, Vec2::new(1.0, 7.0));
        let b = source.sample(dims(16, 16), 4.0, Vec2::new(1.0, 7.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_in_unit_range() {
        let field = NoiseField::<Perlin2D>::default().sample(dims(32, 24), 6.0, Vec2::new(0.3, 0.9));
        let (lo, hi) = field.min_max();
        assert!(lo >= 0.0 && hi <= 1.0, "range [{lo}, {hi}]");
        assert!(hi > lo, "noise field should not be flat");
    }

    #[test]
    fn test_offset_shifts_field() {
        let source = NoiseField::new(Perlin2D::new());
        let a = source.sample(dims(8, 8), 2.0, Vec2::ZERO);
        let b = source.sample(dims(8, 8), 2.0, Vec2::new(0.37, 0.0));
        assert_ne!(a, b);
    }
}
