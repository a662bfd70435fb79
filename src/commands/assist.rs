//! Assist mode
//!
//! The solver suggests guesses for a game played elsewhere; the user reads the
//! codemaker's answer back as feedback.

use super::console::Console;
use crate::core::{Feedback, Sequence};
use crate::output::formatters::{candidate_count, feedback_pegs};
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Show the remaining candidates when at most this many are left
const SHOW_CANDIDATES: usize = 10;

/// A line of assist-mode input
enum Command {
    Feedback(Feedback),
    Undo,
    New,
    Quit,
}

/// Run the interactive assist loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_assist<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    solver: &Solver,
) -> io::Result<()> {
    let length = solver.config().length;

    writeln!(console.out(), "\nI'll suggest guesses that minimize the worst case.")?;
    writeln!(
        console.out(),
        "After each guess, enter the feedback as 'exact partial' (e.g. '1 2'),"
    )?;
    writeln!(console.out(), "or type 'win' if the guess was right.")?;
    writeln!(
        console.out(),
        "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n"
    )?;

    let mut history: Vec<(Sequence, Feedback)> = Vec::new();

    loop {
        let turn = history.len() + 1;

        let suggestion = if solver.has_candidates(&history) {
            solver.next_guess(&history)
        } else {
            None
        };

        let Some(guess) = suggestion else {
            writeln!(
                console.out(),
                "\n{}",
                "No candidates remain! Some feedback must be incorrect.".red()
            )?;
            writeln!(console.out(), "Type 'undo' to go back, or 'new' to start over.\n")?;

            match read_command(console, "Command", length)? {
                Some(Command::Undo) => undo(console.out(), &mut history)?,
                Some(Command::New) => new_game(console.out(), &mut history)?,
                Some(Command::Quit) | None => return farewell(console.out()),
                Some(Command::Feedback(_)) => {}
            }
            continue;
        };

        let candidates_count = solver.count_candidates(&history);

        writeln!(console.out(), "{}", "─".repeat(60))?;
        writeln!(
            console.out(),
            "Turn {turn}: {} candidates remaining",
            candidate_count(candidates_count, solver.config())
        )?;
        writeln!(console.out(), "{}", "─".repeat(60))?;
        writeln!(
            console.out(),
            "\nSuggested guess: {}\n",
            guess.to_string().bright_white().bold()
        )?;

        if candidates_count <= SHOW_CANDIDATES && !solver.config().is_capped(candidates_count) {
            writeln!(console.out(), "Remaining candidates:")?;
            for candidate in solver.candidates(&history).take(SHOW_CANDIDATES) {
                writeln!(console.out(), "  • {candidate}")?;
            }
            writeln!(console.out())?;
        }

        match read_command(console, "Enter feedback ('e p', 'win', or command)", length)? {
            Some(Command::Feedback(feedback)) => {
                history.push((guess, feedback));

                if feedback.is_perfect(length) {
                    celebrate(console.out(), &history, length)?;

                    match console.prompt("Play again? (yes/no)")?.as_deref() {
                        Some("yes" | "y") => new_game(console.out(), &mut history)?,
                        _ => return farewell(console.out()),
                    }
                }
            }
            Some(Command::Undo) => undo(console.out(), &mut history)?,
            Some(Command::New) => new_game(console.out(), &mut history)?,
            Some(Command::Quit) | None => return farewell(console.out()),
        }
    }
}

/// Read a command or feedback, rejecting feedback that can't fit the length
fn read_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    length: usize,
) -> io::Result<Option<Command>> {
    console.prompt_until(prompt, |line| -> Result<Command, String> {
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "new" | "n" => Ok(Command::New),
            "undo" | "u" => Ok(Command::Undo),
            "win" | "correct" | "yes" | "solved" => {
                Ok(Command::Feedback(Feedback::perfect(length)))
            }
            input => {
                let feedback: Feedback = input.parse()?;
                if feedback.exact() + feedback.partial() > length {
                    return Err(format!("Feedback {feedback} has more pegs than {length}"));
                }
                Ok(Command::Feedback(feedback))
            }
        }
    })
}

fn undo<W: Write>(out: &mut W, history: &mut Vec<(Sequence, Feedback)>) -> io::Result<()> {
    if history.pop().is_some() {
        writeln!(out, "✓ Undone! Back to turn {}\n", history.len() + 1)
    } else {
        writeln!(out, "Nothing to undo!\n")
    }
}

fn new_game<W: Write>(out: &mut W, history: &mut Vec<(Sequence, Feedback)>) -> io::Result<()> {
    history.clear();
    writeln!(out, "\nNew game started!\n")
}

fn farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nThanks for playing!\n")
}

fn celebrate<W: Write>(
    out: &mut W,
    history: &[(Sequence, Feedback)],
    length: usize,
) -> io::Result<()> {
    let moves = history.len();

    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!("    Code cracked in {moves} {}!", plural(moves))
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;

    writeln!(out, "\n  Guess history:")?;
    for (i, (guess, feedback)) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {guess}  {}",
            i + 1,
            feedback_pegs(*feedback, length)
        )?;
    }
    writeln!(out)
}

const fn plural(moves: usize) -> &'static str {
    if moves == 1 { "guess" } else { "guesses" }
}
