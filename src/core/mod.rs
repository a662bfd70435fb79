//! Core domain types for Mastermind
//!
//! This module contains the code sequence and the feedback judge.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod sequence;

pub use feedback::Feedback;
pub use sequence::{MAX_LENGTH, Sequence, SequenceError};

/// Guesses played so far, each with the feedback it received
pub type History = [(Sequence, Feedback)];
