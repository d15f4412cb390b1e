//! Simulation controller for sprout.
//!
//! [`Simulation`] owns the current [`BoolGrid`], generates it from a
//! [`SimulationConfig`] and advances it with an [`AutomatonEngine`] whenever
//! the host calls [`Simulation::tick`] with the step gate open.
//!
//! # Example
//!
//! ```
//! use glam::{IVec2, Vec2};
//! use rhizome_sprout_procgen::{GenerationConfig, ProceduralGenerator};
//! use rhizome_sprout_sim::{Simulation, SimulationConfig, StepMode};
//!
//! let config = SimulationConfig::new(
//!     GenerationConfig::new(24, 24).with_offset(Vec2::new(3.0, 7.0)),
//! )
//! .with_mode(StepMode::Stepwise);
//!
//! let mut generator = ProceduralGenerator::seeded(1);
//! let mut sim = Simulation::initialize(&config, &mut generator).unwrap();
//! sim.toggle_cell(IVec2::new(4, 4));
//!
//! sim.start();
//! sim.enable_step_gate();
//! assert!(sim.tick());
//! assert!(!sim.tick());
//! assert_eq!(sim.generation(), 1);
//! ```
//!
//! [`BoolGrid`]: rhizome_sprout_grid::BoolGrid
//! [`AutomatonEngine`]: rhizome_sprout_automata::AutomatonEngine

mod config;
mod observer;
mod simulation;

pub use config::{SimulationConfig, StepMode};
pub use observer::GridObserver;
pub use simulation::{SimState, Simulation};
