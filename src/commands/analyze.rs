//! Guess analysis command
//!
//! Shows how a guess splits the candidate pool into feedback classes.

use crate::core::{Feedback, History, Sequence, SequenceError};
use crate::solver::Solver;
use crate::solver::minimax::feedback_partition;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Sequence,
    /// Feedback classes, largest first
    pub partition: Vec<(Feedback, usize)>,
    pub worst_case: usize,
    pub total_candidates: usize,
}

/// Analyze how a guess partitions the candidates consistent with `history`
///
/// The pool honors the solver's enumeration limit, exactly as minimax sees it.
///
/// # Errors
///
/// Returns an error if the guess length differs from the solver's or the
/// guess uses colors above its `k`.
pub fn analyze_guess(
    guess: &Sequence,
    solver: &Solver,
    history: &History,
) -> Result<AnalysisResult, SequenceError> {
    let config = solver.config();
    guess.check_bounds(config.colors, config.length)?;

    let candidates: Vec<Sequence> = solver.candidates(history).collect();
    let mut partition: Vec<(Feedback, usize)> =
        feedback_partition(guess, &candidates).into_iter().collect();

    // Largest class first, then by feedback for a stable order
    partition.sort_by(|(fa, ca), (fb, cb)| cb.cmp(ca).then_with(|| fb.cmp(fa)));

    let worst_case = partition.first().map_or(0, |(_, count)| *count);

    Ok(AnalysisResult {
        guess: guess.clone(),
        partition,
        worst_case,
        total_candidates: candidates.len(),
    })
}
