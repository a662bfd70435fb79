//! Code solving command
//!
//! The solver plays against a known hidden code and returns the solution path.

use crate::core::{Feedback, Sequence, SequenceError};
use crate::solver::{Solver, SolverConfig};
use std::fmt;

/// Configuration for solving a code
pub struct SolveConfig {
    pub code: Sequence,
    /// Give up after this many guesses; `None` plays until solved
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(code: Sequence) -> Self {
        Self {
            code,
            max_guesses: None,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub code: Sequence,
    /// Solver settings the game was played with
    pub config: SolverConfig,
}

impl SolveResult {
    /// Number of guesses played
    #[must_use]
    pub fn moves(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
///
/// Candidate counts stop at the solver's limit.
pub struct GuessStep {
    pub guess: Sequence,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Why a game could not be played to the end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The hidden code doesn't fit the solver's colors or length
    InvalidCode(SequenceError),
    /// No code is consistent with the feedback so far
    NoCandidates { turn: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(e) => write!(f, "Invalid hidden code: {e}"),
            Self::NoCandidates { turn } => {
                write!(f, "No candidates remain before turn {turn}")
            }
        }
    }
}

impl std::error::Error for SolveError {}

impl From<SequenceError> for SolveError {
    fn from(e: SequenceError) -> Self {
        Self::InvalidCode(e)
    }
}

/// Game loop phases
enum Phase {
    Opening,
    Guessing(Sequence),
    Won,
}

/// Solve a specific code using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The code doesn't match the solver's length or uses colors above its `k`
/// - The solver runs out of candidates (only possible with inconsistent feedback)
///
/// # Examples
/// ```
/// use mastermind::commands::{SolveConfig, solve_code};
/// use mastermind::core::Sequence;
/// use mastermind::solver::{Solver, SolverConfig};
///
/// let code = Sequence::new(vec![1, 2, 3, 4]).unwrap();
/// let solver = Solver::new(SolverConfig::new(4, 4));
///
/// let result = solve_code(SolveConfig::new(code.clone()), &solver).unwrap();
/// assert!(result.success);
/// assert_eq!(result.guesses.last().unwrap().guess, code);
/// ```
pub fn solve_code(config: SolveConfig, solver: &Solver) -> Result<SolveResult, SolveError> {
    let dimensions = solver.config();
    config
        .code
        .check_bounds(dimensions.colors, dimensions.length)?;

    let mut history: Vec<(Sequence, Feedback)> = Vec::new();
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut phase = Phase::Opening;

    loop {
        phase = match phase {
            Phase::Opening => Phase::Guessing(solver.first_guess()),
            Phase::Guessing(guess) => {
                if config.max_guesses.is_some_and(|max| guesses.len() >= max) {
                    break;
                }

                let candidates_before = solver.count_candidates(&history);
                let feedback = Feedback::calculate(&config.code, &guess)?;
                history.push((guess.clone(), feedback));
                let candidates_after = solver.count_candidates(&history);

                log::info!(
                    "turn {}: {guess} scored {feedback}, {candidates_after} candidates left",
                    guesses.len() + 1
                );

                guesses.push(GuessStep {
                    guess,
                    feedback,
                    candidates_before,
                    candidates_after,
                });

                if feedback.is_perfect(dimensions.length) {
                    Phase::Won
                } else if config.max_guesses.is_some_and(|max| guesses.len() >= max) {
                    break;
                } else {
                    let next = solver.next_guess(&history).ok_or(SolveError::NoCandidates {
                        turn: guesses.len() + 1,
                    })?;
                    Phase::Guessing(next)
                }
            }
            Phase::Won => {
                log::info!("solved {} in {} moves", config.code, guesses.len());
                return Ok(SolveResult {
                    success: true,
                    guesses,
                    code: config.code,
                    config: dimensions,
                });
            }
        };
    }

    // Hit the guess cap
    Ok(SolveResult {
        success: false,
        guesses,
        code: config.code,
        config: dimensions,
    })
}
