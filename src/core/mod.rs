//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies:
//! words, tile states and the guess board.

mod board;
mod state;
mod word;

pub use board::{Board, BoardError, COLS, Cell, ROWS, Row};
pub use state::{LetterState, feedback_to_emoji, parse_feedback};
pub use word::{VOWELS, Word, WordError};
