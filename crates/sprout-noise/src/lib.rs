//! Coherent 2D noise for seeding sprout fields.
//!
//! All noise types sample to `[0, 1]` and are pure functions of their
//! parameters and the sample position, so the same inputs always give the
//! same value.
//!
//! ```
//! use rhizome_sprout_noise::{Fbm, Noise2D, Perlin2D};
//!
//! let noise = Perlin2D::new();
//! let value = noise.sample(1.5, 2.5);
//! assert!((0.0..=1.0).contains(&value));
//!
//! let fbm = Fbm::new(Perlin2D::with_seed(7)).octaves(3);
//! assert_eq!(fbm.sample(0.25, 0.75), fbm.sample(0.25, 0.75));
//! ```

use glam::Vec2;

// =============================================================================
// Noise Trait
// =============================================================================

/// A continuous 2D scalar function with output in `[0, 1]`.
pub trait Noise2D {
    /// Sample the noise at position (x, y).
    fn sample(&self, x: f32, y: f32) -> f32;

    /// Sample the noise at position p.
    fn sample_vec(&self, p: Vec2) -> f32 {
        self.sample(p.x, p.y)
    }

    /// Sample the noise, returning value in [-1, 1] range.
    fn sample_signed(&self, x: f32, y: f32) -> f32 {
        self.sample(x, y) * 2.0 - 1.0
    }
}

impl<N: Noise2D + ?Sized> Noise2D for &N {
    fn sample(&self, x: f32, y: f32) -> f32 {
        (**self).sample(x, y)
    }
}

impl<N: Noise2D + ?Sized> Noise2D for Box<N> {
    fn sample(&self, x: f32, y: f32) -> f32 {
        (**self).sample(x, y)
    }
}

// =============================================================================
// Internal: Permutation table and helpers
// =============================================================================

/// Ken Perlin's reference permutation.
const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

#[inline]
fn perm(x: i32, seed: i32) -> u8 {
    PERM[(x.wrapping_add(seed) & 255) as usize]
}

/// Hashes an integer lattice corner.
#[inline]
fn corner(xi: i32, yi: i32, seed: i32) -> u8 {
    perm((perm(xi, seed) as i32).wrapping_add(yi), seed)
}

/// Dot product of the corner's pseudo-random gradient with `(x, y)`.
#[inline]
fn grad(hash: u8, x: f32, y: f32) -> f32 {
    let h = hash & 7;
    let (u, v) = if h < 4 { (x, y) } else { (y, x) };
    let u = if h & 1 != 0 { -u } else { u };
    let v = if h & 2 != 0 { -2.0 * v } else { 2.0 * v };
    u + v
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
#[inline]
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

// =============================================================================
// Perlin Noise
// =============================================================================

/// 2D Perlin (gradient) noise.
///
/// Returns values in [0, 1]. Integer lattice points always sample to 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perlin2D {
    /// Offset into the permutation table.
    pub seed: i32,
}

impl Perlin2D {
    /// Creates Perlin noise with the default seed (0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates Perlin noise with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self { seed }
    }
}

impl Noise2D for Perlin2D {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let cell = Vec2::new(x, y).floor();
        let local = Vec2::new(x, y) - cell;
        let (xi, yi) = (cell.x as i32, cell.y as i32);

        let aa = corner(xi, yi, self.seed);
        let ab = corner(xi, yi.wrapping_add(1), self.seed);
        let ba = corner(xi.wrapping_add(1), yi, self.seed);
        let bb = corner(xi.wrapping_add(1), yi.wrapping_add(1), self.seed);

        let u = fade(local.x);
        let v = fade(local.y);

        let bottom = lerp(
            grad(aa, local.x, local.y),
            grad(ba, local.x - 1.0, local.y),
            u,
        );
        let top = lerp(
            grad(ab, local.x, local.y - 1.0),
            grad(bb, local.x - 1.0, local.y - 1.0),
            u,
        );

        (lerp(bottom, top, v) * 0.5 + 0.5).clamp(0.0, 1.0)
    }
}

// =============================================================================
// Fractal Brownian Motion
// =============================================================================

/// Layers several octaves of a base noise, renormalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fbm<N> {
    /// Base noise function.
    pub noise: N,
    /// Number of noise layers. Zero octaves samples to a flat 0.5.
    pub octaves: u32,
    /// Frequency multiplier per octave.
    pub lacunarity: f32,
    /// Amplitude multiplier per octave.
    pub persistence: f32,
}

impl<N> Fbm<N> {
    /// Creates an fBm with 4 octaves, lacunarity 2.0 and persistence 0.5.
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }

    /// Sets the number of octaves.
    pub fn octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the lacunarity.
    pub fn lacunarity(mut self, lacunarity: f32) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Sets the persistence.
    pub fn persistence(mut self, persistence: f32) -> Self {
        self.persistence = persistence;
        self
    }
}

impl<N: Noise2D> Noise2D for Fbm<N> {
    fn sample(&self, x: f32, y: f32) -> f32 {
        let mut total = 0.0;
        let mut weight = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;

        for _ in 0..self.octaves {
            total += self.noise.sample(x * frequency, y * frequency) * amplitude;
            weight += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        if weight > 0.0 {
            (total / weight).clamp(0.0, 1.0)
        } else {
            0.5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perlin2d_range() {
        let noise = Perlin2D::new();
        for i in 0..100 {
            for j in 0..100 {
                let x = i as f32 * 0.13 - 5.0;
                let y = j as f32 * 0.07 - 2.0;
                let v = noise.sample(x, y);
                assert!(
                    (0.0..=1.0).contains(&v),
                    "perlin2d({x}, {y}) = {v} out of range"
                );
            }
        }
    }

    #[test]
    fn test_perlin2d_lattice_is_midpoint() {
        let noise = Perlin2D::with_seed(9);
        for i in -3..3 {
            for j in -3..3 {
                assert_eq!(noise.sample(i as f32, j as f32), 0.5);
            }
        }
    }

    #[test]
    fn test_perlin2d_is_continuous() {
        let noise = Perlin2D::new();
        let step = 0.001;
        for i in 0..500 {
            let x = i as f32 * 0.01;
            let a = noise.sample(x, 0.37);
            let b = noise.sample(x + step, 0.37);
            assert!((a - b).abs() < 0.01, "jump at x = {x}: {a} -> {b}");
        }
    }

    #[test]
    fn test_noise_deterministic() {
        let perlin = Perlin2D::new();
        assert_eq!(perlin.sample(3.14, 2.71), perlin.sample(3.14, 2.71));
        assert_eq!(
            perlin.sample_vec(Vec2::new(0.3, 0.6)),
            perlin.sample(0.3, 0.6)
        );
    }

    #[test]
    fn test_seed_changes_output() {
        let v1 = Perlin2D::with_seed(0).sample(1.5, 2.5);
        let v2 = Perlin2D::with_seed(42).sample(1.5, 2.5);
        assert_ne!(v1, v2, "different seeds should produce different output");
    }

    #[test]
    fn test_sample_signed_range() {
        let noise = Perlin2D::new();
        let v = noise.sample_signed(0.4, 0.8);
        assert!((-1.0..=1.0).contains(&v));
    }

    #[test]
    fn test_fbm_range() {
        let fbm = Fbm::new(Perlin2D::new()).octaves(5);
        for i in 0..50 {
            for j in 0..50 {
                let v = fbm.sample(i as f32 * 0.1, j as f32 * 0.1);
                assert!((0.0..=1.0).contains(&v), "fbm out of range: {v}");
            }
        }
    }

    #[test]
    fn test_fbm_single_octave_matches_base() {
        let base = Perlin2D::with_seed(3);
        let fbm = Fbm::new(base).octaves(1);
        assert_eq!(fbm.sample(0.7, 1.9), base.sample(0.7, 1.9));
    }

    #[test]
    fn test_fbm_zero_octaves() {
        let fbm = Fbm::new(Perlin2D::new()).octaves(0);
        assert_eq!(fbm.sample(1.2, 3.4), 0.5);
    }

    #[test]
    fn test_boxed_noise() {
        let boxed: Box<dyn Noise2D> = Box::new(Perlin2D::new());
        assert_eq!(boxed.sample(0.2, 0.9), Perlin2D::new().sample(0.2, 0.9));
    }
}
