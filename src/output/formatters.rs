//! Formatting utilities for terminal output

use crate::core::{COLS, Cell, LetterState, Row, feedback_to_emoji};
use colored::{ColoredString, Colorize};

/// Render one tile as a colored block with its letter
#[must_use]
pub fn tile(cell: &Cell) -> ColoredString {
    let letter = cell.letter.map_or(' ', |l| char::from(l.to_ascii_uppercase()));
    let text = format!(" {letter} ");
    match cell.state {
        LetterState::Correct => text.black().on_green().bold(),
        LetterState::Present => text.black().on_yellow().bold(),
        LetterState::Absent => text.white().on_bright_black(),
        LetterState::Pending | LetterState::Empty => text.normal(),
    }
}

/// Render a row of tiles
#[must_use]
pub fn row_tiles(row: &Row) -> String {
    row.iter().map(|cell| tile(cell).to_string()).collect()
}

/// Row tiles followed by the emoji summary, e.g. for sharing
#[must_use]
pub fn row_line(row: &Row) -> String {
    let states = row.map(|cell| cell.state);
    format!("{}  {}", row_tiles(row), feedback_to_emoji(&states))
}

/// Uppercase word with letters that match a locked column in green
#[must_use]
pub fn highlight_locked(word: &str, locked: &[Option<u8>; COLS]) -> String {
    word.bytes()
        .enumerate()
        .map(|(col, letter)| {
            let upper = char::from(letter.to_ascii_uppercase()).to_string();
            if locked.get(col).copied().flatten() == Some(letter) {
                upper.green().bold().to_string()
            } else {
                upper
            }
        })
        .collect()
}
