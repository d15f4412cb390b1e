//! The simulation controller.

use std::fmt;

use glam::IVec2;
use rhizome_sprout_automata::AutomatonEngine;
use rhizome_sprout_grid::BoolGrid;
use rhizome_sprout_noise::Noise2D;
use rhizome_sprout_procgen::{GenerationError, OffsetSource, ProceduralGenerator};
use tracing::{debug, info, trace};

use crate::{GridObserver, SimulationConfig, StepMode};

/// Lifecycle of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimState {
    /// Waiting for [`Simulation::start`]. The grid may be edited.
    #[default]
    Idle,
    /// Steps whenever the gate is open on a tick.
    Running,
}

/// Owns the current grid and decides when it advances.
///
/// The host application calls [`Simulation::tick`] from whatever loop it
/// runs. A tick steps the automaton only while the simulation is running and
/// the step gate is open. In [`StepMode::Stepwise`] each step closes the
/// gate again, so every [`Simulation::enable_step_gate`] allows exactly one
/// generation; in [`StepMode::Continuous`] the gate stays open.
pub struct Simulation {
    grid: BoolGrid,
    engine: AutomatonEngine,
    state: SimState,
    mode: StepMode,
    gate_open: bool,
    generation: u64,
    observers: Vec<Box<dyn GridObserver>>,
}

impl Simulation {
    /// Generates the initial grid and returns an idle simulation.
    pub fn initialize<S, N>(
        config: &SimulationConfig,
        generator: &mut ProceduralGenerator<S, N>,
    ) -> Result<Self, GenerationError>
    where
        S: OffsetSource,
        N: Noise2D + Sync,
    {
        let grid = generator.generate(&config.generation)?;
        info!(
            dimensions = %grid.dimensions(),
            population = grid.population(),
            mode = ?config.mode,
            "simulation initialized"
        );
        Ok(Self::from_grid(grid, config.mode))
    }

    /// Wraps an existing grid in an idle simulation.
    pub fn from_grid(grid: BoolGrid, mode: StepMode) -> Self {
        Self {
            grid,
            engine: AutomatonEngine::life(),
            state: SimState::Idle,
            mode,
            gate_open: false,
            generation: 0,
            observers: Vec::new(),
        }
    }

    /// Replaces the automaton engine.
    pub fn with_engine(mut self, engine: AutomatonEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Regenerates the grid, returning to idle with the gate closed and the
    /// generation counter reset. Observers are kept and notified.
    ///
    /// On error the current grid and state are left untouched.
    pub fn reinitialize<S, N>(
        &mut self,
        config: &SimulationConfig,
        generator: &mut ProceduralGenerator<S, N>,
    ) -> Result<(), GenerationError>
    where
        S: OffsetSource,
        N: Noise2D + Sync,
    {
        let grid = generator.generate(&config.generation)?;
        info!(
            dimensions = %grid.dimensions(),
            population = grid.population(),
            mode = ?config.mode,
            "simulation reinitialized"
        );
        self.grid = grid;
        self.state = SimState::Idle;
        self.mode = config.mode;
        self.gate_open = false;
        self.generation = 0;
        self.notify();
        Ok(())
    }

    /// Registers an observer and immediately sends it the current grid.
    pub fn add_observer(&mut self, mut observer: impl GridObserver + 'static) {
        observer.on_grid_changed(&self.grid, self.generation);
        self.observers.push(Box::new(observer));
    }

    /// Moves from idle to running. Has no effect once running.
    pub fn start(&mut self) {
        if self.state == SimState::Idle {
            self.state = SimState::Running;
            info!(mode = ?self.mode, gate_open = self.gate_open, "simulation started");
        }
    }

    /// Returns to idle, closing the gate. The grid and generation count are
    /// kept.
    pub fn stop(&mut self) {
        if self.state == SimState::Running {
            info!(generation = self.generation, "simulation stopped");
        }
        self.state = SimState::Idle;
        self.gate_open = false;
    }

    /// Opens the step gate.
    ///
    /// In stepwise mode this permits one more step; in continuous mode the
    /// first call opens the gate for good and later calls change nothing.
    pub fn enable_step_gate(&mut self) {
        self.gate_open = true;
    }

    /// Switches between continuous and stepwise gating.
    pub fn set_mode(&mut self, mode: StepMode) {
        if self.mode != mode {
            info!(from = ?self.mode, to = ?mode, "step mode changed");
            self.mode = mode;
        }
    }

    /// Called once per scheduling tick. Returns true if a generation was
    /// computed.
    pub fn tick(&mut self) -> bool {
        if self.state != SimState::Running || !self.gate_open {
            return false;
        }
        if self.mode == StepMode::Stepwise {
            self.gate_open = false;
        }
        self.advance();
        true
    }

    fn advance(&mut self) {
        // The previous grid is dropped once the next one exists.
        self.grid = self.engine.step(&self.grid);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "stepped"
        );
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_grid_changed(&self.grid, self.generation);
        }
    }

    /// Reads a cell. Positions outside the grid read as dead.
    pub fn cell(&self, pos: IVec2) -> bool {
        self.grid.dimensions().contains_signed(pos) && self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// Sets a cell while idle. Returns true if the edit was applied.
    ///
    /// Positions outside the grid and edits while running are ignored.
    pub fn set_cell(&mut self, pos: IVec2, alive: bool) -> bool {
        if !self.accepts_edit(pos) {
            return false;
        }
        self.grid.set(pos.x as usize, pos.y as usize, alive);
        self.notify();
        true
    }

    /// Flips a cell while idle. Returns true if the edit was applied.
    ///
    /// Positions outside the grid and edits while running are ignored.
    pub fn toggle_cell(&mut self, pos: IVec2) -> bool {
        if !self.accepts_edit(pos) {
            return false;
        }
        self.grid.toggle(pos.x as usize, pos.y as usize);
        self.notify();
        true
    }

    fn accepts_edit(&self, pos: IVec2) -> bool {
        if self.state != SimState::Idle {
            debug!(x = pos.x, y = pos.y, "edit ignored while running");
            return false;
        }
        self.grid.dimensions().contains_signed(pos)
    }

    /// Returns the current grid.
    pub fn grid(&self) -> &BoolGrid {
        &self.grid
    }

    /// Consumes the simulation, returning the current grid.
    pub fn into_grid(self) -> BoolGrid {
        self.grid
    }

    /// Returns the automaton engine.
    pub fn engine(&self) -> &AutomatonEngine {
        &self.engine
    }

    /// Number of generations computed since initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SimState {
        self.state
    }

    /// Returns true while running.
    pub fn is_running(&self) -> bool {
        self.state == SimState::Running
    }

    /// Returns the step mode.
    pub fn mode(&self) -> StepMode {
        self.mode
    }

    /// Returns true if the next tick may step.
    pub fn is_gate_open(&self) -> bool {
        self.gate_open
    }
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("dimensions", &self.grid.dimensions())
            .field("state", &self.state)
            .field("mode", &self.mode)
            .field("gate_open", &self.gate_open)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}
