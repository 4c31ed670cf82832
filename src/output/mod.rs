//! Terminal output formatting
//!
//! Colored printing of board rows and suggestion lists for the one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_outcome, print_suggest_result, print_suggestions};
