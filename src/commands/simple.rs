//! Simple line-based mode
//!
//! Text-based game without TUI: one guess per line.

use super::status::summarize;
use crate::output::formatters::colored_row;
use crate::session::{GuessError, SaveStore, Session};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the line-based game until it ends, the input ends, or the player quits
///
/// The session is saved after every accepted guess.
///
/// # Errors
///
/// Returns an error on I/O failure reading input, writing output, or saving.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut Session,
    store: &mut dyn SaveStore,
    mut reader: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n{}", "WORDLE".bright_cyan().bold())?;
    writeln!(
        out,
        "Guess the {}-letter word in {} tries. Type 'quit' to leave.\n",
        crate::core::WORD_LENGTH,
        session.state().max_attempts()
    )?;

    for (letters, evaluation) in summarize(session).rows {
        writeln!(out, "  {}", colored_row(&letters, &evaluation))?;
    }

    while !session.is_finished() {
        write!(
            out,
            "Guess {}/{}: ",
            session.state().attempts_used() + 1,
            session.state().max_attempts()
        )?;
        out.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let input = line.trim();
        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q") {
            writeln!(out, "Progress saved. See you later!")?;
            return Ok(());
        }

        match session.submit(input) {
            Ok(evaluation) => {
                store.save(&session.snapshot())?;
                let letters = input.to_ascii_uppercase();
                writeln!(out, "  {}", colored_row(&letters, &evaluation))?;
            }
            Err(e @ GuessError::Game(_)) => {
                writeln!(out, "{}", e.to_string().red())?;
                break;
            }
            Err(e) => {
                writeln!(out, "{}", e.to_string().red())?;
            }
        }
    }

    let summary = summarize(session);
    if let Some(message) = &summary.message {
        writeln!(out, "\n{}", message.bold())?;
    }
    writeln!(out, "\n{}", summary.share)?;

    Ok(())
}
