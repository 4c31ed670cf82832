//! Command implementations

pub mod check;
pub mod suggest;

pub use check::{CheckResult, check_word};
pub use suggest::{SuggestConfig, SuggestResult, build_board, parse_guess, run_suggest};
