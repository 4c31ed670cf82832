//! Wordle Assist
//!
//! Narrows the possible Wordle answers from the colored feedback of past
//! guesses and ranks the survivors by four simple heuristics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Board;
//! use wordle_assist::solver::{CancelToken, Metric, Outcome, compute};
//! use wordle_assist::wordlists::WordCorpus;
//!
//! let corpus = WordCorpus::embedded().unwrap();
//! let board = Board::from_guesses(&[("crane", "-G--Y")]).unwrap();
//!
//! if let Some(Outcome::Suggestions(s)) = compute(&corpus, &board, &CancelToken::new(), |_| {}) {
//!     for stat in s.ranking.top(Metric::Greens) {
//!         println!("{} ({})", stat.word, stat.greens);
//!     }
//! }
//! ```

// Core domain types
pub mod core;

// Filtering, scoring and the background engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
