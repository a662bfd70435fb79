//! Mastermind
//!
//! A Mastermind judge, player and minimax solver for any number of colors and
//! any code length.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Feedback, Sequence};
//! use mastermind::solver::{Solver, SolverConfig};
//!
//! let hidden = Sequence::new(vec![1, 2, 3, 4]).unwrap();
//! let solver = Solver::new(SolverConfig::new(4, 4));
//!
//! // Opening guess, then the minimax choice
//! let guess = solver.first_guess();
//! let feedback = Feedback::calculate(&hidden, &guess).unwrap();
//! assert_eq!(feedback, Feedback::new(1, 1));
//!
//! let next = solver.next_guess(&[(guess, feedback)]).unwrap();
//! println!("Next guess: {next}");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
