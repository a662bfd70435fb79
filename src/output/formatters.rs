//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::solver::SolverConfig;

/// Format feedback as key pegs: `●` exact, `○` partial, `·` empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let empty = length.saturating_sub(feedback.exact() + feedback.partial());

    format!(
        "{}{}{}",
        "●".repeat(feedback.exact()),
        "○".repeat(feedback.partial()),
        "·".repeat(empty)
    )
}

/// Format a candidate count, marking counts that hit the limit with `+`
#[must_use]
pub fn candidate_count(count: usize, config: SolverConfig) -> String {
    if config.is_capped(count) {
        format!("{count}+")
    } else {
        count.to_string()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
