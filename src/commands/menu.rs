//! Interactive entry menu and hidden-code entry

use super::console::Console;
use crate::core::Sequence;
use std::io::{self, BufRead, Write};

/// Which side of the board the human takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// The human hides a code and the computer guesses it
    Solver,
    /// The computer hides a code and the human guesses it
    Player,
}

/// Print the welcome banner and ask for a game mode
///
/// Returns `None` if input ends first.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn choose_mode<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<GameMode>> {
    writeln!(
        console.out(),
        "Welcome to self-playing version of Mastermind - a game of logic and deduction! Choose your gameplay type:"
    )?;
    writeln!(console.out(), "1. AI gameplay")?;
    writeln!(console.out(), "2. Player gameplay")?;

    console.prompt_until("Your choice", |s| match s.parse::<u32>() {
        Ok(1) => Ok(GameMode::Solver),
        Ok(2) => Ok(GameMode::Player),
        Ok(_) => Err("Incorrect number"),
        Err(_) => Err("You can only pass the number"),
    })
}

/// Ask for the hidden code the solver has to crack
///
/// Any non-empty list of positive colors is accepted; the solver derives its
/// alphabet and length from it.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn ask_hidden_code<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Option<Sequence>> {
    writeln!(
        console.out(),
        "\nPass the hidden sequence and let the computer guess your sequence.\n"
    )?;
    console.prompt_until(
        "Pass the hidden sequence (separate colours by space)",
        Sequence::parse,
    )
}
