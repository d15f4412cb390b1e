//! Life-like cellular automaton over sprout grids.
//!
//! # Example
//!
//! ```
//! use rhizome_sprout_automata::AutomatonEngine;
//! use rhizome_sprout_grid::{BoolGrid, Dimensions};
//!
//! let dims = Dimensions::new(5, 5).unwrap();
//! let blinker = BoolGrid::from_cells(dims, &[(1, 2), (2, 2), (3, 2)]);
//!
//! let engine = AutomatonEngine::life();
//! let next = engine.step(&blinker);
//! assert!(next.get(2, 1) && next.get(2, 2) && next.get(2, 3));
//! assert_eq!(engine.step(&next), blinker);
//! ```

mod engine;
mod rule;

pub use engine::{AutomatonEngine, Edges};
pub use rule::{Rule, RuleParseError};
