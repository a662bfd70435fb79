//! Player mode
//!
//! The human guesses a random hidden code; the program acts as the judge.

use super::console::Console;
use crate::core::{Feedback, MAX_LENGTH, Sequence};
use crate::output::formatters::feedback_pegs;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// How a player game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Won { moves: usize },
    /// The player quit or input ended; the hidden code was revealed
    Abandoned { hidden: Sequence, moves: usize },
}

/// A line of player input
enum PlayerInput {
    Guess(Sequence),
    Quit,
}

/// Ask for the largest color and the code length
///
/// Returns `None` if input ends first.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn ask_dimensions<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<(u8, usize)>> {
    let Some(colors) = console.prompt_until("Tell me the number of 'the biggest' colour", |s| {
        match s.parse::<u8>() {
            Ok(0) => Err("The biggest colour must be at least 1".to_string()),
            Ok(k) => Ok(k),
            Err(_) => Err(format!("'{s}' is not a colour between 1 and 255")),
        }
    })?
    else {
        return Ok(None);
    };

    let Some(length) =
        console.prompt_until("Tell me the length of the hidden sequence", |s| {
            match s.parse::<usize>() {
                Ok(n) if (1..=MAX_LENGTH).contains(&n) => Ok(n),
                _ => Err(format!(
                    "The length must be a number between 1 and {MAX_LENGTH}"
                )),
            }
        })?
    else {
        return Ok(None);
    };

    Ok(Some((colors, length)))
}

/// Draw a hidden code and play a full game
///
/// # Errors
/// Returns an error on I/O failure.
pub fn start_play<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    rng: &mut G,
    colors: u8,
    length: usize,
) -> io::Result<PlayOutcome> {
    let hidden = Sequence::random(rng, colors, length);
    log::debug!("hidden code drawn for {colors} colors, length {length}");
    run_play(console, &hidden, colors)
}

/// Play against a known hidden code
///
/// Guesses must have the hidden code's length and colors in `1..=colors`;
/// invalid guesses are reported and asked again. Typing `quit` or ending the
/// input gives up and reveals the code.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn run_play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    hidden: &Sequence,
    colors: u8,
) -> io::Result<PlayOutcome> {
    let length = hidden.len();

    writeln!(console.out(), "Your goal is to guess the secret code.")?;
    writeln!(
        console.out(),
        "Colours run from 1 to {colors}, the code has {length} of them."
    )?;
    writeln!(
        console.out(),
        "You can give up by typing 'quit' or pressing Ctrl + D.\n\nLet the game begin!\n"
    )?;

    let mut moves = 0;

    loop {
        let input = console.prompt_until(
            "Tell me your guess (separate colours by space)",
            |line| match line.to_lowercase().as_str() {
                "quit" | "q" | "exit" => Ok(PlayerInput::Quit),
                _ => Sequence::parse_bounded(line, colors, length).map(PlayerInput::Guess),
            },
        )?;

        let guess = match input {
            Some(PlayerInput::Guess(guess)) => guess,
            Some(PlayerInput::Quit) | None => {
                give_up(console.out(), hidden)?;
                return Ok(PlayOutcome::Abandoned {
                    hidden: hidden.clone(),
                    moves,
                });
            }
        };

        let feedback = Feedback::calculate(hidden, &guess).map_err(io::Error::other)?;
        moves += 1;

        if feedback.is_perfect(length) {
            writeln!(
                console.out(),
                "\n{}",
                format!("Congrats!! You won the game in {moves} moves!")
                    .bright_green()
                    .bold()
            )?;
            return Ok(PlayOutcome::Won { moves });
        }

        writeln!(
            console.out(),
            "{}  Correct colours, correct positions: {}; correct colours, incorrect positions: {} (move {moves})",
            feedback_pegs(feedback, length),
            feedback.exact(),
            feedback.partial(),
        )?;
    }
}

fn give_up<W: Write>(out: &mut W, hidden: &Sequence) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "Giving up already? Winners don't quit, and quitters don't win.".yellow()
    )?;
    writeln!(out, "\nThe sequence you were supposed to guess was: {hidden}")
}
