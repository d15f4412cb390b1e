//! Error types for sprout-procgen.

use thiserror::Error;

/// Errors returned by grid generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// The configuration cannot produce a grid. Fix the configuration and
    /// call again; retrying unchanged fails the same way.
    #[error("invalid generation config: {0}")]
    InvalidConfig(String),
}

impl From<rhizome_sprout_grid::GridError> for GenerationError {
    fn from(err: rhizome_sprout_grid::GridError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
