//! Benchmark command
//!
//! Tests solver performance across many hidden codes.

use super::solve::{SolveConfig, solve_code};
use crate::core::Sequence;
use crate::solver::{Candidates, Solver, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Codes that took the most guesses, hardest first
    pub hardest: Vec<(Sequence, usize)>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Pick the hidden codes to benchmark against
///
/// `None` takes every code in the search space; `Some(count)` draws that many
/// codes at random from a generator seeded with `seed`.
#[must_use]
pub fn benchmark_codes(config: SolverConfig, count: Option<usize>, seed: u64) -> Vec<Sequence> {
    match count {
        None => Candidates::new(config.with_limit(None), &[]).collect(),
        Some(count) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count)
                .map(|_| Sequence::random(&mut rng, config.colors, config.length))
                .collect()
        }
    }
}

/// Run the solver game loop on every code
///
/// Codes that hit `max_guesses` or run out of candidates count as failures.
pub fn run_benchmark(
    solver: &Solver,
    codes: &[Sequence],
    max_guesses: Option<usize>,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut hardest: Vec<(Sequence, usize)> = Vec::new();

    let pb = ProgressBar::new(codes.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    for (idx, code) in codes.iter().enumerate() {
        let mut config = SolveConfig::new(code.clone());
        config.max_guesses = max_guesses;

        match solve_code(config, solver) {
            Ok(result) if result.success => {
                let guesses = result.moves();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses_seen = max_guesses_seen.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
                hardest.push((code.clone(), guesses));
            }
            Ok(result) => {
                log::warn!("gave up on {code} after {} guesses", result.moves());
            }
            Err(e) => {
                log::warn!("failed on {code}: {e}");
            }
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    hardest.sort_by_key(|(_, guesses)| std::cmp::Reverse(*guesses));
    hardest.truncate(5);

    let duration = start.elapsed();
    let total_codes = codes.len();

    BenchmarkResult {
        total_codes,
        solved,
        failed: total_codes - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses: max_guesses_seen,
        distribution,
        hardest,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_solver() -> (SolverConfig, Solver) {
        let config = SolverConfig::new(3, 3);
        (config, Solver::new(config))
    }

    #[test]
    fn benchmark_runs() {
        let (config, solver) = small_solver();
        let codes = benchmark_codes(config, None, 0);
        let result = run_benchmark(&solver, &codes, None);

        assert_eq!(result.total_codes, 27);
        assert_eq!(result.solved, 27);
        assert_eq!(result.failed, 0);
        assert!(result.average_guesses >= 1.0);
        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.max_guesses, 4);
        assert_eq!(result.total_guesses, 74);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let (config, solver) = small_solver();
        let codes = benchmark_codes(config, None, 0);
        let result = run_benchmark(&solver, &codes, None);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);

        let weighted: usize = result.distribution.iter().map(|(g, c)| g * c).sum();
        assert_eq!(weighted, result.total_guesses);
    }

    #[test]
    fn benchmark_with_guess_cap() {
        let (config, solver) = small_solver();
        let codes = benchmark_codes(config, None, 0);
        let result = run_benchmark(&solver, &codes, Some(1));

        // Only the opening code itself is solved in one guess
        assert_eq!(result.solved, 1);
        assert_eq!(result.failed, 26);
        assert_eq!(result.max_guesses, 1);
    }

    #[test]
    fn benchmark_empty_code_list() {
        let (_, solver) = small_solver();
        let result = run_benchmark(&solver, &[], None);

        assert_eq!(result.total_codes, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn random_codes_are_reproducible() {
        let config = SolverConfig::new(6, 4);
        let first = benchmark_codes(config, Some(20), 7);
        let second = benchmark_codes(config, Some(20), 7);

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
        assert!(first.iter().all(|c| c.check_bounds(6, 4).is_ok()));
    }

    #[test]
    fn hardest_codes_sorted() {
        let (config, solver) = small_solver();
        let codes = benchmark_codes(config, None, 0);
        let result = run_benchmark(&solver, &codes, None);

        assert!(result.hardest.len() <= 5);
        assert_eq!(result.hardest[0].1, result.max_guesses);
        assert!(result.hardest.windows(2).all(|w| w[0].1 >= w[1].1));
    }
}
