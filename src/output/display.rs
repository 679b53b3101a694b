//! Display functions for command results

use super::formatters::{colored_row, score_line};
use crate::commands::{CheckResult, GameSummary};
use crate::core::Outcome;
use colored::Colorize;

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!(
        "{}  {}",
        colored_row(result.guess.text(), &result.evaluation),
        result.evaluation.to_emoji()
    );

    if result.evaluation.is_winning_guess() {
        println!("{}", "Correct!".green().bold());
    }
}

/// Print a saved or finished game
pub fn print_summary(summary: &GameSummary) {
    println!("\n{}", "─".repeat(40).cyan());

    if summary.rows.is_empty() {
        println!("No guesses yet.");
    }
    for (letters, evaluation) in &summary.rows {
        println!("  {}", colored_row(letters, evaluation));
    }

    println!("{}", "─".repeat(40).cyan());
    println!(
        "Attempts: {}/{}",
        summary.state.attempts_used(),
        summary.state.max_attempts()
    );

    match summary.state.outcome() {
        Outcome::InProgress => {
            println!("{}", "Game in progress".bright_white());
        }
        outcome => {
            let message = summary.message.as_deref().unwrap_or_default();
            if outcome == Outcome::Won {
                println!("{}", message.green().bold());
            } else {
                println!("{}", message.red().bold());
            }
            println!(
                "\nWordle {}\n{}",
                score_line(
                    summary.state.attempts_used(),
                    summary.state.max_attempts(),
                    outcome == Outcome::Won
                ),
                summary.share
            );
        }
    }
}
