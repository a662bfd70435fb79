//! Mastermind feedback calculation and representation
//!
//! Feedback is the pair of peg counts the codemaker answers with:
//! - exact: right color in the right position
//! - partial: right color in the wrong position
//!
//! Every peg of either sequence is used at most once across both counts, so
//! `exact + partial` never exceeds the sequence length.

use super::{Sequence, SequenceError};
use std::fmt;

/// Feedback for a guess compared against a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: usize,
    partial: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }

    /// Feedback for a solved code of the given length
    #[inline]
    #[must_use]
    pub const fn perfect(length: usize) -> Self {
        Self::new(length, 0)
    }

    /// Pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Pegs with the right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial(self) -> usize {
        self.partial
    }

    /// Check if this feedback solves a code of the given length
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, length: usize) -> bool {
        self.exact == length && self.partial == 0
    }

    /// Judge `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and mark both positions consumed
    /// 2. Second pass: for each unconsumed guess peg, consume the first
    ///    unconsumed target peg of the same color and count a partial match
    ///
    /// # Errors
    /// Returns `SequenceError::LengthMismatch` if the sequences differ in length.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Sequence};
    ///
    /// let hidden = Sequence::new(vec![1, 2, 3, 4]).unwrap();
    /// let guess = Sequence::new(vec![1, 1, 2, 2]).unwrap();
    ///
    /// let feedback = Feedback::calculate(&hidden, &guess).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 1));
    /// ```
    pub fn calculate(target: &Sequence, guess: &Sequence) -> Result<Self, SequenceError> {
        if target.len() != guess.len() {
            return Err(SequenceError::LengthMismatch {
                expected: target.len(),
                found: guess.len(),
            });
        }

        Ok(Self::between(target.colors(), guess.colors()))
    }

    /// Judge two color slices of equal length
    ///
    /// Callers guarantee equal lengths; the enumeration hot path relies on it.
    pub(crate) fn between(target: &[u8], guess: &[u8]) -> Self {
        debug_assert_eq!(target.len(), guess.len());

        let mut target_used = vec![false; target.len()];
        let mut guess_used = vec![false; guess.len()];
        let mut exact = 0;
        let mut partial = 0;

        // Allow: Index needed to mark both masks at the same position
        #[allow(clippy::needless_range_loop)]
        for i in 0..target.len() {
            if guess[i] == target[i] {
                exact += 1;
                target_used[i] = true;
                guess_used[i] = true;
            }
        }

        for (i, &color) in guess.iter().enumerate() {
            if guess_used[i] {
                continue;
            }

            let found = target
                .iter()
                .zip(target_used.iter())
                .position(|(&c, &used)| !used && c == color);

            if let Some(j) = found {
                target_used[j] = true;
                partial += 1;
            }
        }

        Self { exact, partial }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.partial)
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse `"1 2"`, `"1,2"`, `"1/2"` or `"(1, 2)"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s
            .trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [exact, partial] => {
                let exact = exact
                    .parse()
                    .map_err(|_| format!("Invalid exact count: {exact}"))?;
                let partial = partial
                    .parse()
                    .map_err(|_| format!("Invalid partial count: {partial}"))?;
                Ok(Self::new(exact, partial))
            }
            _ => Err(format!("Invalid feedback string: {s}")),
        }
    }
}
