//! The noise → smooth → mirror → threshold pipeline.

use glam::Vec2;
use rand::rngs::StdRng;
use rhizome_sprout_grid::{BoolGrid, Dimensions, ScalarField};
use rhizome_sprout_noise::{Noise2D, Perlin2D};
use tracing::debug;

use crate::{
    FixedOffset, GenerationConfig, GenerationError, NoiseField, OffsetSource, RngOffset, mirror,
    smooth, threshold,
};

/// Every intermediate buffer of one generation.
///
/// Each stage owns its own buffer; nothing is shared between stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Stages {
    /// Offset the noise was sampled at.
    pub offset: Vec2,
    /// Raw noise field.
    pub noise: ScalarField,
    /// Smoothed field, when smoothing is enabled.
    pub smoothed: Option<ScalarField>,
    /// Field after reflection.
    pub mirrored: ScalarField,
    /// Final occupancy grid.
    pub grid: BoolGrid,
}

/// Builds initial grids from a [`GenerationConfig`].
///
/// The generator owns the noise function and the source of random offsets.
/// Configs with `random_offset` draw exactly once per call.
#[derive(Debug, Clone)]
pub struct ProceduralGenerator<S = RngOffset<StdRng>, N = Perlin2D> {
    source: S,
    field: NoiseField<N>,
    last_offset: Option<Vec2>,
}

impl ProceduralGenerator {
    /// Generator with Perlin noise and an OS-seeded offset source.
    pub fn new() -> Self {
        Self::with_source(RngOffset::from_entropy())
    }

    /// Generator with Perlin noise and a seeded offset source.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngOffset::seeded(seed))
    }
}

impl Default for ProceduralGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: OffsetSource> ProceduralGenerator<S, Perlin2D> {
    /// Generator with Perlin noise and the given offset source.
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            field: NoiseField::default(),
            last_offset: None,
        }
    }
}

impl<S: OffsetSource, N: Noise2D + Sync> ProceduralGenerator<S, N> {
    /// Replaces the noise function.
    pub fn with_noise<M: Noise2D + Sync>(self, noise: M) -> ProceduralGenerator<S, M> {
        ProceduralGenerator {
            source: self.source,
            field: NoiseField::new(noise),
            last_offset: self.last_offset,
        }
    }

    /// Offset used by the most recent successful generation.
    pub fn last_offset(&self) -> Option<Vec2> {
        self.last_offset
    }

    /// Generates a grid.
    pub fn generate(&mut self, config: &GenerationConfig) -> Result<BoolGrid, GenerationError> {
        Ok(self.generate_stages(config)?.grid)
    }

    /// Generates a grid and keeps every intermediate buffer.
    pub fn generate_stages(&mut self, config: &GenerationConfig) -> Result<Stages, GenerationError> {
        let dims = config.validate()?;
        let offset = if config.random_offset {
            self.source.draw(config.offset_limit)
        } else {
            config.offset
        };
        let stages = run_pipeline(&self.field, config, dims, offset);
        self.last_offset = Some(offset);
        Ok(stages)
    }

    /// Generates a grid at an explicit offset, ignoring `random_offset`.
    ///
    /// Pure: the same config and offset always produce the same grid.
    pub fn generate_with_offset(
        &self,
        config: &GenerationConfig,
        offset: Vec2,
    ) -> Result<BoolGrid, GenerationError> {
        let dims = config.validate()?;
        Ok(run_pipeline(&self.field, config, dims, offset).grid)
    }
}

/// Generates a grid with Perlin noise.
///
/// Random offsets are drawn from the OS entropy source; for reproducible
/// output use a fixed offset or [`ProceduralGenerator::seeded`].
pub fn generate(config: &GenerationConfig) -> Result<BoolGrid, GenerationError> {
    if config.random_offset {
        ProceduralGenerator::new().generate(config)
    } else {
        ProceduralGenerator::with_source(FixedOffset(config.offset)).generate(config)
    }
}

fn run_pipeline<N: Noise2D + Sync>(
    field: &NoiseField<N>,
    config: &GenerationConfig,
    dims: Dimensions,
    offset: Vec2,
) -> Stages {
    let noise = field.sample(dims, config.noise_scale, offset);
    let smoothed = config
        .smoothing
        .then(|| smooth(&noise, config.smoothing_radius));
    let mirrored = mirror(smoothed.as_ref().unwrap_or(&noise));
    let grid = threshold(&mirrored, config.threshold);

    assert_eq!(grid.dimensions(), dims, "pipeline stage resized the grid");

    debug!(
        dimensions = %dims,
        offset_x = offset.x,
        offset_y = offset.y,
        smoothing = config.smoothing,
        radius = config.smoothing_radius,
        threshold = config.threshold,
        population = grid.population(),
        "generated grid"
    );

    Stages {
        offset,
        noise,
        smoothed,
        mirrored,
        grid,
    }
}
