//! Main Mastermind solver interface

use super::minimax::select_best_guess;
use super::{Candidates, SolverConfig, opening_guess};
use crate::core::{History, Sequence};

/// Main Mastermind solver
///
/// Coordinates the opening heuristic and minimax selection for one game size.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a new solver for the given game dimensions
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Get the first guess for a new game
    ///
    /// Uses the doubled-colors heuristic; no search is needed.
    #[must_use]
    pub fn first_guess(&self) -> Sequence {
        opening_guess(self.config.length)
    }

    /// Get the next best guess given previous guesses and feedback
    ///
    /// # Parameters
    /// - `history`: Slice of (guess, feedback) pairs from previous turns
    ///
    /// Returns the best next guess, or None if no candidates remain.
    #[must_use]
    pub fn next_guess(&self, history: &History) -> Option<Sequence> {
        // If this is the first guess, use the opening heuristic
        if history.is_empty() {
            return Some(self.first_guess());
        }

        select_best_guess(self.config, history).map(|(guess, _)| guess)
    }

    /// Enumerate the candidates consistent with the history, honoring the limit
    #[must_use]
    pub fn candidates<'h>(&self, history: &'h History) -> Candidates<'h> {
        Candidates::new(self.config, history)
    }

    /// Count the candidates consistent with the history, up to the limit
    ///
    /// A count equal to the limit means "at least this many"; see
    /// [`SolverConfig::is_capped`].
    #[must_use]
    pub fn count_candidates(&self, history: &History) -> usize {
        self.candidates(history).count()
    }

    /// Check whether any code is still consistent with the history
    #[must_use]
    pub fn has_candidates(&self, history: &History) -> bool {
        self.candidates(history).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn setup_solver() -> Solver {
        Solver::new(SolverConfig::new(4, 4))
    }

    fn seq(colors: &[u8]) -> Sequence {
        Sequence::new(colors.to_vec()).unwrap()
    }

    #[test]
    fn first_guess_is_opening_heuristic() {
        let solver = setup_solver();
        assert_eq!(solver.first_guess(), seq(&[1, 1, 2, 2]));
    }

    #[test]
    fn next_guess_with_empty_history() {
        let solver = setup_solver();
        assert_eq!(solver.next_guess(&[]), Some(seq(&[1, 1, 2, 2])));
    }

    #[test]
    fn next_guess_filters_candidates() {
        let solver = setup_solver();
        let hidden = seq(&[1, 2, 3, 4]);
        let guess = solver.first_guess();
        let feedback = Feedback::calculate(&hidden, &guess).unwrap();
        assert_eq!(feedback, Feedback::new(1, 1));

        let history = vec![(guess.clone(), feedback)];
        let next = solver.next_guess(&history).unwrap();

        assert_ne!(next, guess);
        assert_eq!(Feedback::calculate(&next, &guess).unwrap(), feedback);
    }

    #[test]
    fn next_guess_returns_none_when_no_candidates() {
        let solver = setup_solver();

        // 1 1 1 1 can't score two partials against anything
        let history = vec![(seq(&[1, 1, 1, 1]), Feedback::new(2, 2))];

        assert!(solver.next_guess(&history).is_none());
    }

    #[test]
    fn count_candidates_decreases() {
        let solver = setup_solver();
        assert_eq!(solver.count_candidates(&[]), 256);

        let hidden = seq(&[4, 3, 2, 1]);
        let guess = solver.first_guess();
        let feedback = Feedback::calculate(&hidden, &guess).unwrap();
        let history = vec![(guess, feedback)];

        let remaining = solver.count_candidates(&history);
        assert!(remaining < 256);
        assert!(solver.candidates(&history).any(|c| c == hidden));
    }

    #[test]
    fn count_candidates_honors_limit() {
        let config = SolverConfig::new(6, 4).with_limit(Some(10));
        let solver = Solver::new(config);

        assert_eq!(solver.count_candidates(&[]), 10);
        assert!(config.is_capped(10));

        let exhaustive = Solver::new(config.with_limit(None));
        assert_eq!(exhaustive.count_candidates(&[]), 1296);
        assert!(!exhaustive.config().is_capped(1296));
    }

    #[test]
    fn has_candidates_detects_contradiction() {
        let solver = setup_solver();
        assert!(solver.has_candidates(&[]));

        let history = vec![(seq(&[1, 1, 1, 1]), Feedback::new(2, 2))];
        assert!(!solver.has_candidates(&history));
    }

    #[test]
    fn filter_candidates_exact_match() {
        let solver = setup_solver();
        let history = vec![(seq(&[2, 4, 1, 3]), Feedback::perfect(4))];

        let candidates: Vec<Sequence> = solver.candidates(&history).collect();
        assert_eq!(candidates, vec![seq(&[2, 4, 1, 3])]);
    }
}
