//! The 6×5 guess grid
//!
//! `Board` is both the engine's input contract (rows of letter/state cells)
//! and the small entry state machine the front ends drive: typing, backspace,
//! submitting a row and toggling tile colors.

use super::state::{LetterState, parse_feedback};
use super::word::{Word, WordError};
use std::fmt;

/// Number of guesses on a board
pub const ROWS: usize = 6;
/// Letters per guess
pub const COLS: usize = 5;

/// One tile of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub state: LetterState,
}

/// One guess row
pub type Row = [Cell; COLS];

/// Errors raised by board mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The typed word is not an accepted guess
    InvalidGuess(String),
    /// Enter pressed before five letters were typed
    IncompleteRow,
    /// All six rows are already submitted
    BoardFull,
    /// A pending tile was toggled before its row was submitted
    NotSubmitted,
    /// Cell coordinates outside the grid
    OutOfBounds { row: usize, col: usize },
    /// A guess given as text could not be parsed
    InvalidWord(WordError),
    /// A feedback string could not be parsed
    InvalidFeedback(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(word) => write!(f, "'{word}' is not in the word list"),
            Self::IncompleteRow => write!(f, "Type all five letters first"),
            Self::BoardFull => write!(f, "All six rows are used"),
            Self::NotSubmitted => write!(f, "Type your word and press enter first"),
            Self::OutOfBounds { row, col } => write!(f, "No tile at row {row}, column {col}"),
            Self::InvalidWord(err) => write!(f, "Invalid guess: {err}"),
            Self::InvalidFeedback(s) => {
                write!(f, "Invalid feedback '{s}': use 5 of G/Y/- (or 🟩🟨⬜)")
            }
        }
    }
}

impl std::error::Error for BoardError {}

impl From<WordError> for BoardError {
    fn from(err: WordError) -> Self {
        Self::InvalidWord(err)
    }
}

/// The guess grid plus its entry cursor
///
/// Rows fill top-down. Every row below the cursor row is entirely empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    rows: [Row; ROWS],
    /// Row currently being typed (`ROWS` once the board is full)
    row: usize,
    /// Letters typed in the current row
    col: usize,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board of submitted rows from `(guess, feedback)` pairs
    ///
    /// # Errors
    /// Fails on more than six guesses, malformed words or malformed feedback.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Board;
    ///
    /// let board = Board::from_guesses(&[("crane", "GG-GG")]).unwrap();
    /// assert!(board.is_row_resolved(0));
    /// assert!(!board.is_row_resolved(1));
    /// ```
    pub fn from_guesses(guesses: &[(&str, &str)]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (guess, feedback) in guesses {
            let word = Word::new(*guess)?;
            let states = parse_feedback(feedback)
                .ok_or_else(|| BoardError::InvalidFeedback((*feedback).to_string()))?;
            board.push_resolved(&word, states)?;
        }
        Ok(board)
    }

    /// Append a submitted row with explicit feedback
    ///
    /// # Errors
    /// Returns `BoardFull` when six rows are already used.
    pub fn push_resolved(
        &mut self,
        word: &Word,
        states: [LetterState; COLS],
    ) -> Result<(), BoardError> {
        if self.row >= ROWS {
            return Err(BoardError::BoardFull);
        }
        for (col, state) in states.into_iter().enumerate() {
            self.rows[self.row][col] = Cell {
                letter: Some(word.char_at(col)),
                state,
            };
        }
        self.row += 1;
        self.col = 0;
        Ok(())
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < ROWS && col < COLS {
            Some(&self.rows[row][col])
        } else {
            None
        }
    }

    /// Current `(row, letters typed)` entry position
    #[must_use]
    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// All six rows are submitted
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.row >= ROWS
    }

    /// A row is resolved when all five tiles carry feedback
    #[must_use]
    pub fn is_row_resolved(&self, row: usize) -> bool {
        row < ROWS && self.rows[row].iter().all(|cell| cell.state.is_feedback())
    }

    /// Typed word of the current row, if five letters are in
    #[must_use]
    pub fn current_letters(&self) -> Option<[u8; COLS]> {
        if self.row >= ROWS {
            return None;
        }
        let mut letters = [0u8; COLS];
        for (slot, cell) in letters.iter_mut().zip(&self.rows[self.row]) {
            *slot = cell.letter?;
        }
        Some(letters)
    }

    /// Type a letter into the current row
    ///
    /// Returns whether the board changed.
    pub fn type_letter(&mut self, ch: char) -> bool {
        if self.row >= ROWS || self.col >= COLS || !ch.is_ascii_alphabetic() {
            return false;
        }
        self.rows[self.row][self.col] = Cell {
            letter: Some(ch.to_ascii_lowercase() as u8),
            state: LetterState::Pending,
        };
        self.col += 1;
        true
    }

    /// Erase the last typed letter
    ///
    /// On an empty current row this steps back into the previous row: its last
    /// letter is erased and its remaining tiles lose their feedback.
    /// Returns whether the board changed.
    pub fn backspace(&mut self) -> bool {
        if self.row < ROWS && self.col > 0 {
            self.col -= 1;
            self.rows[self.row][self.col] = Cell::default();
            return true;
        }
        if self.row == 0 {
            return false;
        }

        self.row -= 1;
        self.col = COLS - 1;
        let row = &mut self.rows[self.row];
        row[COLS - 1] = Cell::default();
        for cell in &mut row[..COLS - 1] {
            cell.state = LetterState::Pending;
        }
        true
    }

    /// Submit the current row
    ///
    /// The word must satisfy `is_valid_guess`. Each tile starts as Absent,
    /// or Correct when an earlier row already has the same letter marked
    /// Correct in that column. Present is never assigned here; the user sets
    /// it by toggling.
    ///
    /// # Errors
    /// `BoardFull`, `IncompleteRow`, or `InvalidGuess` (board left unchanged).
    pub fn submit<F>(&mut self, is_valid_guess: F) -> Result<(), BoardError>
    where
        F: Fn(&str) -> bool,
    {
        if self.row >= ROWS {
            return Err(BoardError::BoardFull);
        }
        let letters = self.current_letters().ok_or(BoardError::IncompleteRow)?;
        let word = Word::from_letters(letters)?;
        if !is_valid_guess(word.text()) {
            return Err(BoardError::InvalidGuess(word.text().to_string()));
        }

        for (col, &letter) in letters.iter().enumerate() {
            let confirmed = self.rows[..self.row].iter().any(|earlier| {
                earlier[col].state == LetterState::Correct && earlier[col].letter == Some(letter)
            });
            self.rows[self.row][col].state = if confirmed {
                LetterState::Correct
            } else {
                LetterState::Absent
            };
        }

        self.row += 1;
        self.col = 0;
        Ok(())
    }

    /// Cycle the color of a submitted tile
    ///
    /// Returns `Ok(true)` when the tile changed and `Ok(false)` for an empty
    /// tile.
    ///
    /// # Errors
    /// `NotSubmitted` for a pending tile, `OutOfBounds` for bad coordinates.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, BoardError> {
        if row >= ROWS || col >= COLS {
            return Err(BoardError::OutOfBounds { row, col });
        }
        let cell = &mut self.rows[row][col];
        match cell.state {
            LetterState::Empty => Ok(false),
            LetterState::Pending => Err(BoardError::NotSubmitted),
            state => {
                if let Some(next) = state.cycled() {
                    cell.state = next;
                }
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(board: &mut Board, word: &str) {
        for ch in word.chars() {
            assert!(board.type_letter(ch));
        }
    }

    fn accept_all(_: &str) -> bool {
        true
    }

    fn states(board: &Board, row: usize) -> Vec<LetterState> {
        board.rows()[row].iter().map(|c| c.state).collect()
    }

    #[test]
    fn typing_marks_cells_pending() {
        let mut board = Board::new();
        type_word(&mut board, "Cra");

        assert_eq!(board.cursor(), (0, 3));
        assert_eq!(board.cell(0, 0).unwrap().letter, Some(b'c'));
        assert_eq!(board.cell(0, 2).unwrap().state, LetterState::Pending);
        assert_eq!(board.cell(0, 3).unwrap().state, LetterState::Empty);
        assert!(!board.is_row_resolved(0));
    }

    #[test]
    fn typing_stops_at_five_letters() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        assert!(!board.type_letter('s'));
        assert!(!board.type_letter('1'));
        assert_eq!(board.cursor(), (0, 5));
    }

    #[test]
    fn submit_rejects_unknown_word_without_mutation() {
        let mut board = Board::new();
        type_word(&mut board, "xqzzy");
        let before = board.clone();

        let err = board.submit(|w| w == "crane").unwrap_err();
        assert_eq!(err, BoardError::InvalidGuess("xqzzy".to_string()));
        assert_eq!(board, before);
    }

    #[test]
    fn submit_requires_five_letters() {
        let mut board = Board::new();
        type_word(&mut board, "cra");
        assert_eq!(board.submit(accept_all), Err(BoardError::IncompleteRow));
    }

    #[test]
    fn submit_defaults_to_absent() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        board.submit(accept_all).unwrap();

        assert!(board.is_row_resolved(0));
        assert!(states(&board, 0).iter().all(|&s| s == LetterState::Absent));
        assert_eq!(board.cursor(), (1, 0));
    }

    #[test]
    fn submit_carries_over_confirmed_greens_only() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        board.submit(accept_all).unwrap();
        // c and e confirmed, a marked present
        board.toggle(0, 0).unwrap();
        board.toggle(0, 0).unwrap();
        board.toggle(0, 4).unwrap();
        board.toggle(0, 4).unwrap();
        board.toggle(0, 2).unwrap();

        type_word(&mut board, "cease");
        board.submit(accept_all).unwrap();

        assert_eq!(
            states(&board, 1),
            vec![
                LetterState::Correct,
                LetterState::Absent,
                LetterState::Absent, // 'a' present earlier is not carried
                LetterState::Absent,
                LetterState::Correct,
            ]
        );
    }

    #[test]
    fn toggle_cycles_submitted_tiles() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        board.submit(accept_all).unwrap();

        assert_eq!(board.toggle(0, 1), Ok(true));
        assert_eq!(board.cell(0, 1).unwrap().state, LetterState::Present);
        assert_eq!(board.toggle(0, 1), Ok(true));
        assert_eq!(board.cell(0, 1).unwrap().state, LetterState::Correct);
        assert_eq!(board.toggle(0, 1), Ok(true));
        assert_eq!(board.cell(0, 1).unwrap().state, LetterState::Absent);
    }

    #[test]
    fn toggle_pending_is_rejected_and_empty_is_noop() {
        let mut board = Board::new();
        type_word(&mut board, "cr");

        assert_eq!(board.toggle(0, 0), Err(BoardError::NotSubmitted));
        assert_eq!(board.cell(0, 0).unwrap().state, LetterState::Pending);
        assert_eq!(board.toggle(3, 3), Ok(false));
        assert!(matches!(
            board.toggle(6, 0),
            Err(BoardError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn backspace_within_row() {
        let mut board = Board::new();
        type_word(&mut board, "cr");
        assert!(board.backspace());
        assert_eq!(board.cursor(), (0, 1));
        assert_eq!(board.cell(0, 1).unwrap(), &Cell::default());
    }

    #[test]
    fn backspace_on_empty_first_row_is_noop() {
        let mut board = Board::new();
        assert!(!board.backspace());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn backspace_reopens_previous_row() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        board.submit(accept_all).unwrap();

        assert!(board.backspace());
        assert_eq!(board.cursor(), (0, 4));
        assert_eq!(board.cell(0, 4).unwrap().letter, None);
        assert!(
            states(&board, 0)[..4]
                .iter()
                .all(|&s| s == LetterState::Pending)
        );
        assert!(!board.is_row_resolved(0));

        assert!(board.type_letter('s'));
        board.submit(accept_all).unwrap();
        assert_eq!(board.rows()[0].map(|c| c.letter.unwrap()), *b"crans");
    }

    #[test]
    fn board_fills_six_rows_then_stops() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            type_word(&mut board, "crane");
            board.submit(accept_all).unwrap();
        }
        assert!(board.is_full());
        assert!(!board.type_letter('a'));
        assert_eq!(board.submit(accept_all), Err(BoardError::BoardFull));
        assert!(board.backspace());
        assert_eq!(board.cursor(), (5, 4));
    }

    #[test]
    fn rows_below_cursor_stay_empty() {
        let mut board = Board::new();
        type_word(&mut board, "crane");
        board.submit(accept_all).unwrap();
        type_word(&mut board, "sl");

        for row in 2..ROWS {
            assert!(
                board.rows()[row]
                    .iter()
                    .all(|c| *c == Cell::default())
            );
        }
    }

    #[test]
    fn from_guesses_builds_resolved_rows() {
        let board = Board::from_guesses(&[("crane", "G-Y--"), ("SLOTH", "🟩⬜⬜⬜🟨")]).unwrap();

        assert!(board.is_row_resolved(0));
        assert!(board.is_row_resolved(1));
        assert_eq!(board.cursor(), (2, 0));
        assert_eq!(board.cell(1, 0).unwrap().letter, Some(b's'));
        assert_eq!(board.cell(1, 4).unwrap().state, LetterState::Present);
    }

    #[test]
    fn from_guesses_rejects_bad_input() {
        assert!(matches!(
            Board::from_guesses(&[("cran", "GGGGG")]),
            Err(BoardError::InvalidWord(_))
        ));
        assert!(matches!(
            Board::from_guesses(&[("crane", "GGXGG")]),
            Err(BoardError::InvalidFeedback(_))
        ));
        let seven = vec![("crane", "-----"); 7];
        assert_eq!(Board::from_guesses(&seven), Err(BoardError::BoardFull));
    }
}
