//! Display functions for command results

use super::formatters::{highlight_locked, row_line};
use crate::commands::{CheckResult, SuggestResult};
use crate::core::ROWS;
use crate::solver::{Outcome, Suggestions};
use colored::Colorize;

/// Print the submitted rows followed by the outcome
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    for row in 0..ROWS {
        if result.board.is_row_resolved(row) {
            println!("  {}", row_line(&result.board.rows()[row]));
        }
    }
    println!("{}", "─".repeat(60).cyan());

    print_outcome(&result.outcome);
}

pub fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Suggestions(suggestions) => print_suggestions(suggestions),
        Outcome::NoCandidates { reason } => {
            println!("\n{}", format!("❌ {reason}").red().bold());
        }
    }
}

/// Print the four ranked lists side by side
pub fn print_suggestions(suggestions: &Suggestions) {
    println!(
        "\n📊 {} {}",
        suggestions.remaining.to_string().bright_yellow().bold(),
        if suggestions.remaining == 1 {
            "possible answer"
        } else {
            "possible answers"
        }
    );

    for (metric, list) in suggestions.ranking.lists() {
        println!("\n{}", metric.label().bright_cyan().bold());
        if list.is_empty() {
            println!("   {}", "(none)".bright_black());
        }
        for (i, stat) in list.iter().enumerate() {
            println!(
                "   {}. {}  {}",
                i + 1,
                highlight_locked(&stat.word, &suggestions.locked),
                metric.value(stat).to_string().bright_black()
            );
        }
    }
}

/// Print whether a word may be guessed
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.to_uppercase();
    if !result.valid {
        println!("{}", format!("❌ {word} is not in the word list").red().bold());
    } else if result.answer {
        println!(
            "{}",
            format!("✅ {word} is a valid guess and a possible answer")
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("✅ {word} is a valid guess (never an answer)").green()
        );
    }
}
