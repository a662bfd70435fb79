//! Opening guess heuristic
//!
//! Doubling colors (`1 1 2 2 3 3 ...`) gives structured, informative feedback
//! on the first move without any search.

use crate::core::Sequence;

/// Build the opening guess for a code of the given length
///
/// Emits `floor(n / 2)` pairs starting at color 1; an odd length gets one
/// more color, one greater than the last pair. The result does not depend on
/// the number of colors, so short alphabets may see colors above `k` here.
/// Past 510 positions the colors stay at 255.
///
/// # Panics
/// Panics if `length` is zero.
///
/// # Examples
/// ```
/// use mastermind::solver::opening_guess;
///
/// assert_eq!(opening_guess(4).colors(), &[1, 1, 2, 2]);
/// assert_eq!(opening_guess(5).colors(), &[1, 1, 2, 2, 3]);
/// ```
#[must_use]
pub fn opening_guess(length: usize) -> Sequence {
    assert!(length > 0, "opening guess needs at least one position");

    let colors: Vec<u8> = (0..length)
        .map(|i| u8::try_from(i / 2 + 1).unwrap_or(u8::MAX))
        .collect();

    Sequence::from_raw(&colors)
}
