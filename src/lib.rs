//! `thistlethwaite`: solves the 3x3 Rubik's cube with Thistlethwaite's
//! four-phase group-reduction algorithm.

#[macro_use]
extern crate lazy_static;

/// Cube-state representation and face-turn application.
pub mod state;

/// Turn tokens (`Move`) and their parsing/formatting.
pub mod moves;

/// Cubelet numbering and per-face turn cycle tables.
pub mod constants;

/// The six coordinate-encoding functions and the four phase coordinates.
pub mod coord;

/// Phase pattern databases: BFS construction and the on-disk table format.
pub mod tables;

/// Per-phase search: greedy descent for phases 0-1, IDDFS for phases 2-3.
pub mod search;

/// Solution simplification (adjacent same-face turn collapsing).
pub mod solution;

/// Scramble tokenization and random scramble generation.
pub mod scramble;

/// The `Solver` facade tying the phases together.
pub mod solver;

/// Self-test harness and its structured report type.
pub mod selftest;

/// Error type shared across the crate.
pub mod error;

pub use error::Error;
pub use moves::Move;
pub use selftest::run_self_tests;
pub use solver::Solver;
pub use state::CubeState;
pub use tables::generate_all_tables;
