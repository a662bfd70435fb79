//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod console;
pub mod menu;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_guess};
pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, benchmark_codes, run_benchmark};
pub use console::Console;
pub use menu::{GameMode, ask_hidden_code, choose_mode};
pub use play::{PlayOutcome, ask_dimensions, run_play, start_play};
pub use solve::{GuessStep, SolveConfig, SolveError, SolveResult, solve_code};
