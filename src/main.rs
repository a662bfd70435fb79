//! Mastermind - CLI
//!
//! Play Mastermind against the computer, let the minimax solver crack your
//! code, or use it as an assistant for a game played elsewhere.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{
        Console, GameMode, SolveConfig, analyze_guess, ask_dimensions,
        ask_hidden_code, benchmark_codes, choose_mode, run_assist, run_benchmark, solve_code,
        start_play,
    },
    core::{MAX_LENGTH, Sequence},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_LIMIT, Solver, SolverConfig},
};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind with a minimax code-breaking solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Candidates enumerated per minimax pass (default 1000)
    #[arg(short, long, global = true, conflicts_with = "exhaustive")]
    limit: Option<usize>,

    /// Enumerate every candidate (exact minimax, slow for large games)
    #[arg(long, global = true)]
    exhaustive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the computer crack a hidden code
    Solve {
        /// The hidden code, colors separated by spaces (prompted if omitted)
        code: Vec<String>,

        /// Largest color (default: the largest color in the code)
        #[arg(short, long)]
        colors: Option<u8>,

        /// Code length (default: the length of the code)
        #[arg(short = 'n', long)]
        length: Option<usize>,

        /// Give up after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,

        /// Show candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Guess a random code chosen by the computer
    Play {
        /// Largest color
        #[arg(short, long)]
        colors: Option<u8>,

        /// Code length
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },

    /// Get guess suggestions for a game played elsewhere
    Assist {
        /// Largest color
        #[arg(short, long)]
        colors: u8,

        /// Code length
        #[arg(short = 'n', long)]
        length: usize,
    },

    /// Show how a guess splits the candidates
    Analyze {
        /// Guess to analyze, colors separated by spaces
        #[arg(required = true)]
        guess: Vec<String>,

        /// Largest color
        #[arg(short, long)]
        colors: u8,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Largest color
        #[arg(short, long)]
        colors: u8,

        /// Code length
        #[arg(short = 'n', long)]
        length: usize,

        /// Number of random codes to test (default: every code)
        #[arg(long)]
        count: Option<usize>,

        /// Seed for the random codes
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Give up on a code after this many guesses
        #[arg(short, long)]
        max_guesses: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let limit = resolve_limit(cli.limit, cli.exhaustive)?;

    match cli.command {
        None => run_menu(limit),
        Some(Commands::Solve {
            code,
            colors,
            length,
            max_guesses,
            verbose,
        }) => {
            let code = if code.is_empty() {
                let mut console = Console::stdio();
                match ask_hidden_code(&mut console).context("Failed to read the hidden code")? {
                    Some(code) => code,
                    None => return Ok(()),
                }
            } else {
                Sequence::parse(&code.join(" ")).context("Invalid hidden code")?
            };
            solve_command(code, colors, length, max_guesses, verbose, limit)
        }
        Some(Commands::Play { colors, length }) => {
            play_command(&mut Console::stdio(), colors, length)
        }
        Some(Commands::Assist { colors, length }) => {
            let config = solver_config(colors, length, limit)?;
            let mut console = Console::stdio();
            run_assist(&mut console, &Solver::new(config)).context("Assist session failed")
        }
        Some(Commands::Analyze { guess, colors }) => {
            let guess = Sequence::parse(&guess.join(" ")).context("Invalid guess")?;
            let config = solver_config(colors, guess.len(), limit)?;
            let result = analyze_guess(&guess, &Solver::new(config), &[])?;
            print_analysis_result(&result);
            Ok(())
        }
        Some(Commands::Benchmark {
            colors,
            length,
            count,
            seed,
            max_guesses,
        }) => {
            let config = solver_config(colors, length, limit)?;
            benchmark_command(config, count, seed, max_guesses);
            Ok(())
        }
    }
}

/// Map `--limit` / `--exhaustive` to the solver's enumeration limit
fn resolve_limit(limit: Option<usize>, exhaustive: bool) -> Result<Option<usize>> {
    match (limit, exhaustive) {
        (_, true) => Ok(None),
        (Some(0), false) => bail!("--limit must be at least 1"),
        (limit, false) => Ok(Some(limit.unwrap_or(DEFAULT_LIMIT))),
    }
}

fn solver_config(colors: u8, length: usize, limit: Option<usize>) -> Result<SolverConfig> {
    if colors == 0 {
        bail!("--colors must be at least 1");
    }
    if !(1..=MAX_LENGTH).contains(&length) {
        bail!("--length must be between 1 and {MAX_LENGTH}");
    }
    Ok(SolverConfig::new(colors, length).with_limit(limit))
}

fn run_menu(limit: Option<usize>) -> Result<()> {
    let mut console = Console::stdio();

    match choose_mode(&mut console).context("Failed to read the game mode")? {
        Some(GameMode::Solver) => {
            let Some(code) = ask_hidden_code(&mut console).context("Failed to read the hidden code")?
            else {
                return Ok(());
            };
            solve_command(code, None, None, None, false, limit)
        }
        Some(GameMode::Player) => play_command(&mut console, None, None),
        None => Ok(()),
    }
}

fn solve_command(
    code: Sequence,
    colors: Option<u8>,
    length: Option<usize>,
    max_guesses: Option<usize>,
    verbose: bool,
    limit: Option<usize>,
) -> Result<()> {
    let colors = colors.unwrap_or_else(|| code.max_color());
    let length = length.unwrap_or_else(|| code.len());
    let solver = Solver::new(solver_config(colors, length, limit)?);

    let mut config = SolveConfig::new(code);
    config.max_guesses = max_guesses;

    let result = solve_code(config, &solver)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn play_command<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    colors: Option<u8>,
    length: Option<usize>,
) -> Result<()> {
    let (colors, length) = match (colors, length) {
        (Some(colors), Some(length)) => {
            solver_config(colors, length, None)?;
            (colors, length)
        }
        _ => match ask_dimensions(console).context("Failed to read the game size")? {
            Some(dimensions) => dimensions,
            None => return Ok(()),
        },
    };

    let outcome = start_play(console, &mut rand::rng(), colors, length)
        .context("Player game failed")?;
    log::info!("player game finished: {outcome:?}");
    Ok(())
}

fn benchmark_command(
    config: SolverConfig,
    count: Option<usize>,
    seed: u64,
    max_guesses: Option<usize>,
) {
    let codes = benchmark_codes(config, count, seed);
    match count {
        Some(count) => println!(
            "Running benchmark on {count} random codes ({} colors, length {})...",
            config.colors, config.length
        ),
        None => println!(
            "Running benchmark on all {} codes ({} colors, length {})...",
            codes.len(),
            config.colors,
            config.length
        ),
    }

    let result = run_benchmark(&Solver::new(config), &codes, max_guesses);
    print_benchmark_result(&result);
}
