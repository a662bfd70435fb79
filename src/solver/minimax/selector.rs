//! Minimax-based guess selection
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.
//! Guesses are drawn from the candidate pool itself, and every guess is scored
//! against a freshly regenerated enumeration of the same pool.

use super::calculator::calculate_max_remaining;
use crate::core::{History, Sequence};
use crate::solver::{Candidates, SolverConfig};

/// Select best guess by minimizing worst-case remaining candidates
///
/// Both the outer guess enumeration and the inner scoring enumeration are
/// capped by `config.limit`. Ties keep the first guess in enumeration order.
///
/// Returns the chosen guess with its worst-case count, or `None` if no code is
/// consistent with the history.
///
/// # Examples
/// ```
/// use mastermind::solver::SolverConfig;
/// use mastermind::solver::minimax::select_best_guess;
///
/// // 1 1 leaves up to 9 codes, 1 2 at most 6
/// let (best, max_remaining) = select_best_guess(SolverConfig::new(4, 2), &[]).unwrap();
/// assert_eq!(best.colors(), &[1, 2]);
/// assert_eq!(max_remaining, 6);
/// ```
#[must_use]
pub fn select_best_guess(config: SolverConfig, history: &History) -> Option<(Sequence, usize)> {
    let mut best: Option<(Sequence, usize)> = None;

    for guess in Candidates::new(config, history) {
        let max_remaining = calculate_max_remaining(&guess, Candidates::new(config, history));

        if best
            .as_ref()
            .is_none_or(|(_, best_max)| max_remaining < *best_max)
        {
            best = Some((guess, max_remaining));

            // Nothing beats a guess that isolates every candidate
            if max_remaining <= 1 {
                break;
            }
        }
    }

    if let Some((guess, max_remaining)) = &best {
        log::debug!("minimax picked {guess} (worst case {max_remaining})");
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn seq(colors: &[u8]) -> Sequence {
        Sequence::new(colors.to_vec()).unwrap()
    }

    fn entry(target: &[u8], guess: &[u8]) -> (Sequence, Feedback) {
        let guess = seq(guess);
        let feedback = Feedback::calculate(&seq(target), &guess).unwrap();
        (guess, feedback)
    }

    #[test]
    fn selects_lowest_max_remaining() {
        // 1 1 1 leaves 12 codes on (1, 0); 1 1 2 never more than 6
        let config = SolverConfig::new(3, 3);

        let (best, max_remaining) = select_best_guess(config, &[]).unwrap();
        assert_eq!(best, seq(&[1, 1, 2]));
        assert_eq!(max_remaining, 6);
    }

    #[test]
    fn equal_scores_keep_earlier_guess() {
        // Pool after 1 1 scoring (0, 0) over 3 colors: 22 23 32 33, all score 2
        let config = SolverConfig::new(3, 2);
        let history = vec![(seq(&[1, 1]), Feedback::new(0, 0))];

        let (best, max_remaining) = select_best_guess(config, &history).unwrap();
        assert_eq!(best, seq(&[2, 2]));
        assert_eq!(max_remaining, 2);
    }

    #[test]
    fn single_candidate_is_returned() {
        let config = SolverConfig::new(4, 3);
        let history = vec![(seq(&[2, 3, 1]), Feedback::perfect(3))];

        let (best, max_remaining) = select_best_guess(config, &history).unwrap();
        assert_eq!(best, seq(&[2, 3, 1]));
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn ties_keep_first_in_enumeration_order() {
        // Empty history over 2 colors, length 1: both guesses split 1/1
        let config = SolverConfig::new(2, 1);

        let (best, max_remaining) = select_best_guess(config, &[]).unwrap();
        assert_eq!(best, seq(&[1]));
        assert_eq!(max_remaining, 1);
    }

    #[test]
    fn deterministic() {
        let hidden = [1, 2, 3, 4];
        let config = SolverConfig::new(4, 4);
        let history = vec![entry(&hidden, &[1, 1, 2, 2])];

        let first = select_best_guess(config, &history);
        let second = select_best_guess(config, &history);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn choice_is_a_consistent_candidate() {
        let hidden = [3, 1, 4, 1];
        let config = SolverConfig::new(4, 4);
        let history = vec![entry(&hidden, &[1, 1, 2, 2]), entry(&hidden, &[1, 3, 3, 4])];

        let (best, _) = select_best_guess(config, &history).unwrap();
        for (guess, feedback) in &history {
            assert_eq!(Feedback::calculate(&best, guess).unwrap(), *feedback);
        }
    }

    #[test]
    fn worst_case_bounded_by_pool() {
        let hidden = [2, 2, 1];
        let config = SolverConfig::new(3, 3).with_limit(None);
        let history = vec![entry(&hidden, &[1, 1, 2])];

        let pool = Candidates::new(config, &history).count();
        let (_, max_remaining) = select_best_guess(config, &history).unwrap();
        assert!((1..=pool).contains(&max_remaining));
    }

    #[test]
    fn returns_none_on_contradictory_history() {
        let config = SolverConfig::new(2, 2);
        let guess = seq(&[1, 2]);
        let history = vec![
            (guess.clone(), Feedback::perfect(2)),
            (guess, Feedback::new(0, 2)),
        ];

        assert!(select_best_guess(config, &history).is_none());
    }

    #[test]
    fn limit_restricts_both_passes() {
        // With a limit of one, the first code in order is both the only guess
        // and the only candidate it is scored against
        let config = SolverConfig::new(6, 4).with_limit(Some(1));

        let (best, max_remaining) = select_best_guess(config, &[]).unwrap();
        assert_eq!(best, seq(&[1, 1, 1, 1]));
        assert_eq!(max_remaining, 1);
    }
}
