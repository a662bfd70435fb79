//! Mastermind solving algorithms
//!
//! Candidate enumeration, the opening heuristic, and minimax guess selection.

mod candidates;
mod config;
mod engine;
pub mod minimax;
mod opening;

pub use candidates::Candidates;
pub use config::{DEFAULT_LIMIT, SolverConfig};
pub use engine::Solver;
pub use opening::opening_guess;
