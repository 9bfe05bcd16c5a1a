//! Interactive console driver for the wordshift engine.
//!
//! A manual smoke test over the public API: prompts for a word, encodes it,
//! loops over shift guesses until the shift is found, prints the guess
//! statistics, then decodes and reveals the word. All game rules live in
//! `wordshift-engine`; this binary only consumes return values and errors.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, Level};
use wordshift_engine::{CipherGame, ShiftSource, MAX_SHIFT, MIN_SHIFT};
use wordshift_types::Comparison;

#[derive(Parser)]
#[command(name = "wordshift", about = "Caesar-shift a word, then guess the shift.")]
struct Args {
    /// Seed for the shift stream (OS entropy if omitted).
    #[arg(long, conflicts_with = "shift")]
    seed: Option<u64>,

    /// Pin the shift instead of drawing one (1..=9).
    #[arg(long)]
    shift: Option<u8>,

    /// Print statistics as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let source = match (args.shift, args.seed) {
        (Some(shift), _) => ShiftSource::fixed(shift).context("invalid --shift")?,
        (None, Some(seed)) => ShiftSource::seeded(seed),
        (None, None) => ShiftSource::from_entropy(),
    };
    let mut game = CipherGame::with_source(source);
    debug!(pinned = args.shift.is_some(), "session created");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let Some(word) = prompt(&mut lines, "word to encode (blank to quit): ")? else {
            break;
        };
        if word.is_empty() {
            break;
        }

        let ciphertext = match game.encode(&word) {
            Ok(ciphertext) => ciphertext,
            Err(err) => {
                println!("cannot encode: {err}");
                continue;
            }
        };
        println!("encoded: {ciphertext}");
        println!("guess the shift ({MIN_SHIFT}..={MAX_SHIFT})");

        run_guess_loop(&mut game, &mut lines)?;
        print_statistics(&game, args.json)?;

        let shift = game.shift_value();
        let plaintext = game
            .decode()
            .context("session lost its pending word mid-round")?;
        println!("the word was {plaintext:?} (shift {shift})");
    }

    Ok(())
}

/// Reads guesses until the shift is found or input ends.
fn run_guess_loop(
    game: &mut CipherGame,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    loop {
        let Some(input) = prompt(lines, "guess: ")? else {
            return Ok(());
        };
        let value: i64 = match input.parse() {
            Ok(value) => value,
            Err(_) => {
                println!("not an integer: {input:?}");
                continue;
            }
        };
        match game.guess(value) {
            Ok(Comparison::Correct) => {
                println!("correct!");
                return Ok(());
            }
            Ok(Comparison::TooLow) => println!("too low"),
            Ok(Comparison::TooHigh) => println!("too high"),
            Err(err) => {
                println!("cannot guess: {err}");
                return Ok(());
            }
        }
    }
}

fn print_statistics(game: &CipherGame, json: bool) -> Result<()> {
    let stats = game.statistics();
    if json {
        let line = serde_json::to_string(&stats).context("failed to serialize statistics")?;
        println!("{line}");
    } else {
        println!(
            "guesses: {} (avg {}, {} low, {} high)",
            stats.count, stats.average, stats.low_count, stats.high_count
        );
    }
    Ok(())
}

/// Prints `text`, flushes, and reads one trimmed line. `None` on EOF.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush().context("failed to flush stdout")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read stdin")?.trim().to_string())),
        None => Ok(None),
    }
}
