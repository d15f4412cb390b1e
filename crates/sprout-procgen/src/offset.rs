//! Sources for randomized noise offsets.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the noise offset when a configuration asks for a random one.
///
/// Called at most once per generation.
pub trait OffsetSource {
    /// Returns the offset for the next generation. Random sources keep both
    /// components in `[0, limit)` and return zero for a zero limit.
    fn draw(&mut self, limit: f32) -> Vec2;
}

/// Always returns the same offset regardless of the limit. Used to pin the
/// "random" draw in tests.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedOffset(pub Vec2);

impl OffsetSource for FixedOffset {
    fn draw(&mut self, _limit: f32) -> Vec2 {
        self.0
    }
}

/// Draws offsets uniformly from a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngOffset<R> {
    rng: R,
}

impl<R: Rng> RngOffset<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngOffset<StdRng> {
    /// Deterministic source for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> OffsetSource for RngOffset<R> {
    fn draw(&mut self, limit: f32) -> Vec2 {
        if limit <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.rng.gen_range(0.0..limit), self.rng.gen_range(0.0..limit))
    }
}

impl<S: OffsetSource + ?Sized> OffsetSource for &mut S {
    fn draw(&mut self, limit: f32) -> Vec2 {
        (**self).draw(limit)
    }
}
