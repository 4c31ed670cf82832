//! One-shot suggestion command
//!
//! Builds a board from `word=feedback` arguments, runs it through the engine
//! and returns the outcome.

use crate::core::{Board, BoardError};
use crate::solver::{EngineConfig, EngineEvent, Outcome, SuggestionEngine, TOTAL_CELLS};
use crate::wordlists::WordCorpus;
use anyhow::{Context, Result, anyhow, bail};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for the engine before giving up
const TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a suggest run
pub struct SuggestConfig {
    /// Guesses as `word=feedback`, oldest first
    pub guesses: Vec<String>,
    pub engine: EngineConfig,
    pub show_progress: bool,
}

/// Result of a suggest run
pub struct SuggestResult {
    pub board: Board,
    pub outcome: Outcome,
}

/// Split a `word=feedback` argument
///
/// # Errors
///
/// Returns an error if there is no `=`.
pub fn parse_guess(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .map(|(word, feedback)| (word.trim(), feedback.trim()))
        .ok_or_else(|| anyhow!("Expected WORD=FEEDBACK (e.g. crane=GY-G-), got '{arg}'"))
}

/// Build a board from `word=feedback` arguments
///
/// Every word must be an accepted guess.
///
/// # Errors
///
/// Returns an error for malformed arguments, unknown words, bad feedback or
/// more than six guesses.
pub fn build_board(corpus: &WordCorpus, guesses: &[String]) -> Result<Board> {
    let pairs = guesses
        .iter()
        .map(|arg| parse_guess(arg))
        .collect::<Result<Vec<_>>>()?;

    for (word, _) in &pairs {
        if !corpus.is_valid_guess(word) {
            bail!(BoardError::InvalidGuess(word.to_lowercase()));
        }
    }

    Ok(Board::from_guesses(&pairs)?)
}

/// Run the engine on the given guesses and wait for its outcome
///
/// # Errors
///
/// Returns an error if the guesses are invalid or the engine does not finish
/// in time.
pub fn run_suggest(corpus: Arc<WordCorpus>, config: SuggestConfig) -> Result<SuggestResult> {
    let board = build_board(&corpus, &config.guesses)?;

    let pb = if config.show_progress {
        ProgressBar::new(TOTAL_CELLS as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} cells | {msg}")
            .context("invalid progress template")?
            .progress_chars("█▓▒░"),
    );

    let engine = SuggestionEngine::new(corpus, config.engine);
    engine.refresh(&board);

    let outcome = engine.wait_outcome(TIMEOUT, |event| match event {
        EngineEvent::Loading => pb.set_message("filtering"),
        EngineEvent::Progress(progress) => pb.set_position(progress.done as u64),
        EngineEvent::Finished(_) => {}
    });
    pb.finish_and_clear();

    let outcome = outcome.with_context(|| format!("no result after {}s", TIMEOUT.as_secs()))?;
    Ok(SuggestResult { board, outcome })
}
