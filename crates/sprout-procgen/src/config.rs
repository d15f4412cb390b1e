//! Generation configuration.

use glam::Vec2;
use rhizome_sprout_grid::Dimensions;

use crate::GenerationError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for one call to [`crate::ProceduralGenerator::generate`].
///
/// The smoothing radius is a `usize`, so a negative radius cannot be
/// expressed. Everything else is checked by [`GenerationConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GenerationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Noise periods spanned by the grid along each axis.
    pub noise_scale: f32,
    /// Noise offset used when `random_offset` is false.
    pub offset: Vec2,
    /// Exclusive upper bound of the per-axis random offset.
    pub offset_limit: f32,
    /// Draw the offset once per generation from `[0, offset_limit)`.
    pub random_offset: bool,
    /// Run the smoothing stage.
    pub smoothing: bool,
    /// Chebyshev radius of the smoothing kernel.
    pub smoothing_radius: usize,
    /// Cells strictly above this value are alive.
    pub threshold: f32,
}

impl GenerationConfig {
    /// Creates a configuration with a fixed zero offset and no smoothing.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            noise_scale: 8.0,
            offset: Vec2::ZERO,
            offset_limit: 1000.0,
            random_offset: false,
            smoothing: false,
            smoothing_radius: 1,
            threshold: 0.5,
        }
    }

    /// Sets the noise scale.
    pub fn with_noise_scale(mut self, scale: f32) -> Self {
        self.noise_scale = scale;
        self
    }

    /// Uses a fixed noise offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self.random_offset = false;
        self
    }

    /// Draws the offset from `[0, limit)` on every generation.
    pub fn with_random_offset(mut self, limit: f32) -> Self {
        self.offset_limit = limit;
        self.random_offset = true;
        self
    }

    /// Enables smoothing with the given radius.
    pub fn with_smoothing(mut self, radius: usize) -> Self {
        self.smoothing = true;
        self.smoothing_radius = radius;
        self
    }

    /// Disables smoothing.
    pub fn without_smoothing(mut self) -> Self {
        self.smoothing = false;
        self
    }

    /// Sets the binarization threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the grid dimensions, failing if either is zero.
    pub fn dimensions(&self) -> Result<Dimensions, GenerationError> {
        Ok(Dimensions::new(self.width, self.height)?)
    }

    /// Checks that the configuration can produce a grid.
    pub fn validate(&self) -> Result<Dimensions, GenerationError> {
        let dims = self.dimensions()?;

        if !self.noise_scale.is_finite() {
            return Err(GenerationError::InvalidConfig(format!(
                "noise scale must be finite, got {}",
                self.noise_scale
            )));
        }
        if !self.offset.is_finite() {
            return Err(GenerationError::InvalidConfig(format!(
                "noise offset must be finite, got {}",
                self.offset
            )));
        }
        if self.random_offset && !(self.offset_limit.is_finite() && self.offset_limit >= 0.0) {
            return Err(GenerationError::InvalidConfig(format!(
                "offset limit must be finite and non-negative, got {}",
                self.offset_limit
            )));
        }
        if self.threshold.is_nan() {
            return Err(GenerationError::InvalidConfig(
                "threshold must not be NaN".into(),
            ));
        }

        Ok(dims)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(64, 64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let dims = GenerationConfig::default().validate().unwrap();
        assert_eq!((dims.width(), dims.height()), (64, 64));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            GenerationConfig::new(0, 10).validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
        assert!(matches!(
            GenerationConfig::new(10, 0).validate(),
            Err(GenerationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let base = GenerationConfig::new(8, 8);
        assert!(base.clone().with_noise_scale(f32::NAN).validate().is_err());
        assert!(
            base.clone()
                .with_offset(Vec2::new(f32::INFINITY, 0.0))
                .validate()
                .is_err()
        );
        assert!(base.clone().with_random_offset(-1.0).validate().is_err());
        assert!(base.clone().with_threshold(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_negative_limit_ignored_for_fixed_offset() {
        let mut config = GenerationConfig::new(8, 8);
        config.offset_limit = -5.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = GenerationConfig::new(4, 4)
            .with_random_offset(50.0)
            .with_smoothing(3)
            .with_threshold(0.3);
        assert!(config.random_offset);
        assert_eq!(config.offset_limit, 50.0);
        assert!(config.smoothing);
        assert_eq!(config.smoothing_radius, 3);
        assert_eq!(config.threshold, 0.3);

        let config = config.with_offset(Vec2::ONE).without_smoothing();
        assert!(!config.random_offset);
        assert!(!config.smoothing);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_config_uses_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{"width": 20, "height": 10, "smoothing": true}"#).unwrap();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 10);
        assert!(config.smoothing);
        assert_eq!(config.threshold, 0.5);

        assert!(serde_json::from_str::<GenerationConfig>(r#"{"smoothing_radius": -1}"#).is_err());
    }
}
