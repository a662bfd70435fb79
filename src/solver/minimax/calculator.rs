//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a guess and a stream of candidates, computes the maximum remaining
//! candidates for any possible feedback.

use crate::core::{Feedback, Sequence};
use rustc_hash::FxHashMap;
use std::borrow::Borrow;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible feedback that could result from this guess:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind::core::Sequence;
/// use mastermind::solver::minimax::calculate_max_remaining;
///
/// let guess = Sequence::new(vec![1, 2]).unwrap();
/// let candidates = vec![
///     Sequence::new(vec![1, 2]).unwrap(),
///     Sequence::new(vec![2, 1]).unwrap(),
/// ];
///
/// let max_remaining = calculate_max_remaining(&guess, &candidates);
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn calculate_max_remaining<I>(guess: &Sequence, candidates: I) -> usize
where
    I: IntoIterator,
    I::Item: Borrow<Sequence>,
{
    feedback_partition(guess, candidates)
        .into_values()
        .max()
        .unwrap_or(0)
}

/// Group candidates by the feedback they give against the guess
///
/// Candidates whose length differs from the guess are skipped.
#[must_use]
pub fn feedback_partition<I>(guess: &Sequence, candidates: I) -> FxHashMap<Feedback, usize>
where
    I: IntoIterator,
    I::Item: Borrow<Sequence>,
{
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let candidate = candidate.borrow();
        if candidate.len() != guess.len() {
            continue;
        }
        let feedback = Feedback::between(guess.colors(), candidate.colors());
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}
