//! Interactive TUI interface
//!
//! Type guesses on the grid, color the tiles to match the game, and read the
//! suggestion lists as the engine refreshes them.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
