//! Lazy enumeration of codes consistent with a guess history
//!
//! Walks the Cartesian product `{1..=k}^n` in lexicographic order (last
//! position varies fastest) and yields only the codes that would have
//! produced every recorded feedback. Nothing is materialized: dropping the
//! iterator abandons the walk.

use super::SolverConfig;
use crate::core::{Feedback, History, Sequence};

/// Iterator over the candidate pool for one history
///
/// # Examples
/// ```
/// use mastermind::core::{Feedback, Sequence};
/// use mastermind::solver::{Candidates, SolverConfig};
///
/// let guess = Sequence::new(vec![1, 1]).unwrap();
/// let history = vec![(guess, Feedback::new(1, 0))];
///
/// let pool: Vec<Sequence> = Candidates::new(SolverConfig::new(2, 2), &history).collect();
/// let colors: Vec<&[u8]> = pool.iter().map(Sequence::colors).collect();
/// assert_eq!(colors, vec![&[1, 2][..], &[2, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Candidates<'h> {
    history: &'h History,
    colors: u8,
    cursor: Option<Vec<u8>>,
    remaining: Option<usize>,
}

impl<'h> Candidates<'h> {
    /// Start a fresh enumeration
    ///
    /// Each call is independent; two iterators built from the same arguments
    /// yield the same sequence.
    #[must_use]
    pub fn new(config: SolverConfig, history: &'h History) -> Self {
        let cursor = (config.colors > 0 && config.length > 0).then(|| vec![1; config.length]);

        Self {
            history,
            colors: config.colors,
            cursor,
            remaining: config.limit,
        }
    }

    /// Advance the odometer past the current code
    fn step(&mut self) {
        let Some(code) = self.cursor.as_mut() else {
            return;
        };

        for color in code.iter_mut().rev() {
            if *color < self.colors {
                *color += 1;
                return;
            }
            *color = 1;
        }

        // Carried out of the first position: product exhausted
        self.cursor = None;
    }
}

/// Check a code reproduces every recorded feedback
pub(crate) fn is_consistent(code: &[u8], history: &History) -> bool {
    history.iter().all(|(guess, feedback)| {
        guess.len() == code.len() && Feedback::between(code, guess.colors()) == *feedback
    })
}

impl Iterator for Candidates<'_> {
    type Item = Sequence;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }

        loop {
            let consistent = {
                let code = self.cursor.as_deref()?;
                is_consistent(code, self.history).then(|| Sequence::from_raw(code))
            };
            self.step();

            if let Some(candidate) = consistent {
                if let Some(remaining) = self.remaining.as_mut() {
                    *remaining -= 1;
                }
                return Some(candidate);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.is_none() {
            return (0, Some(0));
        }
        (0, self.remaining)
    }
}

impl std::iter::FusedIterator for Candidates<'_> {}
