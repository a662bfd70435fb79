//! Display functions for command results

use super::formatters::{candidate_count, create_progress_bar, feedback_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print a solver game turn by turn
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.code.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Hidden sequence: {}",
        result.code.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        if turn == 1 {
            println!("\nLet's start the game!! My initial guess is: {}", step.guess);
        } else {
            println!("\nMy {turn} guess is: {}", step.guess);
        }

        println!(
            "{}  Correct colours, correct positions: {}; correct colours, incorrect positions: {}",
            feedback_pegs(step.feedback, length),
            step.feedback.exact(),
            step.feedback.partial()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                candidate_count(step.candidates_before, result.config),
                candidate_count(step.candidates_after, result.config)
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Congrats to me!! I won the game in {} moves!", result.moves())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Gave up after {} guesses", result.moves())
                .red()
                .bold()
        );
    }
}

/// Print how a guess splits the candidates
pub fn print_analysis_result(result: &AnalysisResult) {
    let length = result.guess.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} candidates:", result.total_candidates);
    println!(
        "   Worst case:  {}",
        format!("{} candidates remain", result.worst_case).bright_yellow()
    );
    println!("   Classes:     {}", result.partition.len());

    println!("\n📈 {}", "Partition:".bright_cyan().bold());
    for (feedback, count) in &result.partition {
        let bar = create_progress_bar(*count as f64, result.worst_case as f64, 30);
        println!(
            "   {} {feedback}  {} {count}",
            feedback_pegs(*feedback, length),
            bar.green()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&guesses, &count)| (guesses, count))
        .collect();
    counts.sort_unstable();

    for (guess_count, count) in counts {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }

    if !result.hardest.is_empty() {
        println!("\n🧩 {}", "Hardest codes:".bright_cyan().bold());
        for (code, guesses) in &result.hardest {
            println!("   {code}  ({guesses} guesses)");
        }
    }
}
