//! Solver configuration

/// Default cap on candidates enumerated per minimax pass
///
/// Exact minimax only holds while fewer candidates than this remain; above it
/// both passes see the first `DEFAULT_LIMIT` candidates in enumeration order.
pub const DEFAULT_LIMIT: usize = 1000;

/// Game dimensions plus the enumeration cap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Largest color `k`; colors run `1..=k`
    pub colors: u8,
    /// Sequence length `n`
    pub length: usize,
    /// Candidates enumerated per pass, `None` for the full pool
    pub limit: Option<usize>,
}

impl SolverConfig {
    /// Create a configuration with the default limit
    ///
    /// # Parameters
    /// - `colors`: largest color `k` (default limit applies to any value)
    /// - `length`: sequence length `n`
    #[must_use]
    pub const fn new(colors: u8, length: usize) -> Self {
        Self {
            colors,
            length,
            limit: Some(DEFAULT_LIMIT),
        }
    }

    /// Replace the enumeration limit
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Check whether a limited count may have stopped short of the full pool
    #[must_use]
    pub fn is_capped(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count >= limit)
    }
}
