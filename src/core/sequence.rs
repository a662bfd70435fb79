//! Mastermind code sequence representation
//!
//! A Sequence is an ordered, non-empty list of colors. Colors are positive
//! integers; the largest allowed color `k` is a property of the game, not of
//! the sequence, so bounds are checked by the constructors that know `k`.

use rand::Rng;
use std::fmt;

/// Longest sequence accepted anywhere in the crate
///
/// Every color of the opening guess `1 1 2 2 ...` still fits in a `u8` at
/// this length.
pub const MAX_LENGTH: usize = 255;

/// An immutable code: either the hidden sequence or a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(Box<[u8]>);

/// Error type for invalid sequences
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    Empty,
    TooLong { length: usize },
    InvalidToken(String),
    NonPositive { position: usize },
    OutOfRange { position: usize, color: u64, max: u8 },
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Sequence must contain at least one color"),
            Self::TooLong { length } => write!(
                f,
                "Sequence has {length} colors, at most {MAX_LENGTH} are supported"
            ),
            Self::InvalidToken(token) => {
                write!(f, "You can only use numbers in the sequence, got '{token}'")
            }
            Self::NonPositive { position } => write!(
                f,
                "Color at position {} can't be zero (only 1, 2, ..., k)",
                position + 1
            ),
            Self::OutOfRange {
                position,
                color,
                max,
            } => write!(
                f,
                "Color {color} at position {} isn't in the range of colors 1..={max}",
                position + 1
            ),
            Self::LengthMismatch { expected, found } => {
                write!(f, "Sequence must have {expected} colors, got {found}")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Create a new Sequence from raw colors
    ///
    /// # Errors
    /// Returns `SequenceError` if the list is empty, longer than
    /// [`MAX_LENGTH`], or contains a zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Sequence;
    ///
    /// let code = Sequence::new(vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.len(), 4);
    ///
    /// assert!(Sequence::new(Vec::new()).is_err());
    /// assert!(Sequence::new(vec![1, 0]).is_err());
    /// ```
    pub fn new(colors: Vec<u8>) -> Result<Self, SequenceError> {
        if colors.is_empty() {
            return Err(SequenceError::Empty);
        }

        if colors.len() > MAX_LENGTH {
            return Err(SequenceError::TooLong {
                length: colors.len(),
            });
        }

        if let Some(position) = colors.iter().position(|&c| c == 0) {
            return Err(SequenceError::NonPositive { position });
        }

        Ok(Self(colors.into_boxed_slice()))
    }

    /// Wrap colors produced by enumeration, which are positive by construction
    pub(crate) fn from_raw(colors: &[u8]) -> Self {
        debug_assert!(!colors.is_empty() && colors.iter().all(|&c| c > 0));
        Self(colors.into())
    }

    /// Parse whitespace-separated color tokens like `"1 2 3 4"`
    ///
    /// # Errors
    /// Returns `SequenceError` for empty input, non-numeric tokens, zeros, or
    /// colors that do not fit in a byte.
    pub fn parse(input: &str) -> Result<Self, SequenceError> {
        let mut colors = Vec::new();

        for (position, token) in input.split_whitespace().enumerate() {
            let color: u64 = token
                .parse()
                .map_err(|_| SequenceError::InvalidToken(token.to_string()))?;

            if color == 0 {
                return Err(SequenceError::NonPositive { position });
            }

            let color = u8::try_from(color).map_err(|_| SequenceError::OutOfRange {
                position,
                color,
                max: u8::MAX,
            })?;
            colors.push(color);
        }

        Self::new(colors)
    }

    /// Parse a guess for a game with colors `1..=max_color` and the given length
    ///
    /// # Errors
    /// Everything [`Sequence::parse`] rejects, plus a wrong number of colors
    /// or a color above `max_color`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Sequence, SequenceError};
    ///
    /// let guess = Sequence::parse_bounded("1 6 2 2", 6, 4).unwrap();
    /// assert_eq!(guess.colors(), &[1, 6, 2, 2]);
    ///
    /// assert!(matches!(
    ///     Sequence::parse_bounded("1 7 2 2", 6, 4),
    ///     Err(SequenceError::OutOfRange { color: 7, .. })
    /// ));
    /// ```
    pub fn parse_bounded(
        input: &str,
        max_color: u8,
        length: usize,
    ) -> Result<Self, SequenceError> {
        let sequence = Self::parse(input)?;
        sequence.check_bounds(max_color, length)?;
        Ok(sequence)
    }

    /// Check this sequence fits a game with colors `1..=max_color` and the given length
    ///
    /// # Errors
    /// Returns `LengthMismatch` or `OutOfRange` on the first violation.
    pub fn check_bounds(&self, max_color: u8, length: usize) -> Result<(), SequenceError> {
        if self.len() != length {
            return Err(SequenceError::LengthMismatch {
                expected: length,
                found: self.len(),
            });
        }

        match self.0.iter().position(|&c| c > max_color) {
            Some(position) => Err(SequenceError::OutOfRange {
                position,
                color: u64::from(self.0[position]),
                max: max_color,
            }),
            None => Ok(()),
        }
    }

    /// Draw a uniformly random sequence over colors `1..=max_color`
    ///
    /// # Panics
    /// Panics if `max_color` or `length` is zero.
    pub fn random<R: Rng>(rng: &mut R, max_color: u8, length: usize) -> Self {
        assert!(max_color > 0 && length > 0, "empty color range or length");
        let colors: Vec<u8> = (0..length)
            .map(|_| rng.random_range(1..=max_color))
            .collect();
        Self(colors.into_boxed_slice())
    }

    /// Get the colors as a slice
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The largest color used
    #[must_use]
    pub fn max_color(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sequence_creation_valid() {
        let code = Sequence::new(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(code.colors(), &[1, 2, 3, 4]);
        assert_eq!(code.len(), 4);
        assert!(!code.is_empty());
    }

    #[test]
    fn sequence_creation_invalid() {
        assert_eq!(Sequence::new(Vec::new()), Err(SequenceError::Empty));
        assert_eq!(
            Sequence::new(vec![1, 0, 2]),
            Err(SequenceError::NonPositive { position: 1 })
        );
    }

    #[test]
    fn rejects_sequences_over_max_length() {
        assert!(Sequence::new(vec![1; MAX_LENGTH]).is_ok());
        assert_eq!(
            Sequence::new(vec![1; 300]),
            Err(SequenceError::TooLong { length: 300 })
        );

        let long = vec!["1"; 600].join(" ");
        assert_eq!(
            Sequence::parse(&long),
            Err(SequenceError::TooLong { length: 600 })
        );
    }

    #[test]
    fn parse_accepts_extra_whitespace() {
        let code = Sequence::parse("  3 1\t4  1 ").unwrap();
        assert_eq!(code.colors(), &[3, 1, 4, 1]);
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        assert_eq!(Sequence::parse(""), Err(SequenceError::Empty));
        assert_eq!(Sequence::parse("   "), Err(SequenceError::Empty));
        assert_eq!(
            Sequence::parse("1 a 3"),
            Err(SequenceError::InvalidToken("a".to_string()))
        );
        assert_eq!(
            Sequence::parse("1 -2 3"),
            Err(SequenceError::InvalidToken("-2".to_string()))
        );
        assert_eq!(
            Sequence::parse("1 0 3"),
            Err(SequenceError::NonPositive { position: 1 })
        );
        assert!(matches!(
            Sequence::parse("1 300"),
            Err(SequenceError::OutOfRange { color: 300, .. })
        ));
    }

    #[test]
    fn parse_bounded_checks_length() {
        assert_eq!(
            Sequence::parse_bounded("1 2 3", 6, 4),
            Err(SequenceError::LengthMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn parse_bounded_checks_range() {
        // Colors above k are rejected; 1 and k are both allowed
        assert!(Sequence::parse_bounded("1 6 6 1", 6, 4).is_ok());
        assert_eq!(
            Sequence::parse_bounded("1 2 7 1", 6, 4),
            Err(SequenceError::OutOfRange {
                position: 2,
                color: 7,
                max: 6
            })
        );
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = Sequence::random(&mut rng, 3, 5);
            assert_eq!(code.len(), 5);
            assert!(code.check_bounds(3, 5).is_ok());
        }
    }

    #[test]
    fn max_color() {
        let code = Sequence::new(vec![2, 5, 1]).unwrap();
        assert_eq!(code.max_color(), 5);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let code = Sequence::new(vec![1, 1, 2, 2]).unwrap();
        assert_eq!(code.to_string(), "1 1 2 2");
        assert_eq!(code.to_string().parse::<Sequence>().unwrap(), code);
    }

    #[test]
    fn error_messages_are_one_based() {
        let err = SequenceError::NonPositive { position: 0 };
        assert!(err.to_string().contains("position 1"));
    }
}
