//! Runs a simulation without a renderer, printing the grid as text.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p rhizome-sprout-sim --example headless -- 40 20 30
//! ```
//!
//! Arguments are width, height and number of generations.

use rhizome_sprout_grid::BoolGrid;
use rhizome_sprout_procgen::{GenerationConfig, ProceduralGenerator};
use rhizome_sprout_sim::{Simulation, SimulationConfig, StepMode};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let width: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(40);
    let height: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(20);
    let generations: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(30);

    let config = SimulationConfig::new(
        GenerationConfig::new(width, height)
            .with_random_offset(1000.0)
            .with_smoothing(1)
            .with_threshold(0.45),
    )
    .with_mode(StepMode::Stepwise);

    let mut generator = ProceduralGenerator::new();
    let mut sim = Simulation::initialize(&config, &mut generator)?;
    if let Some(offset) = generator.last_offset() {
        println!("offset: {:.2}, {:.2}", offset.x, offset.y);
    }
    sim.add_observer(|grid: &BoolGrid, generation: u64| {
        println!("generation {generation}, population {}", grid.population());
        println!("{grid}");
    });

    sim.start();
    while sim.generation() < generations {
        sim.enable_step_gate();
        sim.tick();
    }
    Ok(())
}
