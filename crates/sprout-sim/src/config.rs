//! Simulation configuration.

use rhizome_sprout_procgen::GenerationConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How [`crate::Simulation::tick`] consumes the step gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepMode {
    /// Once opened, the gate stays open and every tick steps.
    #[default]
    Continuous,
    /// Each opening of the gate permits exactly one step.
    Stepwise,
}

/// Everything needed to initialize a [`crate::Simulation`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Parameters for the initial grid.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub generation: GenerationConfig,
    /// Gate behavior while running.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: StepMode,
}

impl SimulationConfig {
    /// Creates a config in continuous mode.
    pub fn new(generation: GenerationConfig) -> Self {
        Self {
            generation,
            mode: StepMode::Continuous,
        }
    }

    /// Sets the step mode.
    pub fn with_mode(mut self, mode: StepMode) -> Self {
        self.mode = mode;
        self
    }
}
