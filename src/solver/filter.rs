//! Candidate filtering from board feedback
//!
//! Walks resolved rows left to right and shrinks the answer pool:
//! - Correct locks the letter at that column and keeps only words with it there
//! - Present keeps only words containing the letter
//! - Absent drops words containing the letter, unless it is already locked
//!
//! Letters are tracked as present/absent flags, not counts. Only an earlier
//! Correct tile protects a letter from a later Absent tile; an earlier Present
//! does not, so a repeated letter marked Present then Absent drops every word
//! containing it. Duplicate-letter guesses can therefore keep or drop more
//! words than exact Wordle rules would.

use crate::core::{Board, COLS, LetterState, ROWS, Word};
use crate::wordlists::WordCorpus;
use rustc_hash::FxHashSet;
use std::convert::Infallible;
use std::ops::ControlFlow;

/// Cells inspected by a full pass over the board
pub const TOTAL_CELLS: usize = ROWS * COLS;

/// Filtering progress, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

/// Candidates left after applying feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'c> {
    /// Surviving answers, in corpus order
    pub candidates: Vec<&'c Word>,
    /// Letter confirmed at each column, if any
    pub locked: [Option<u8>; COLS],
}

/// Result of a filtering pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterResult<'c> {
    /// The first row carries no feedback yet
    Unconstrained,
    Filtered(Filtered<'c>),
}

/// Filter the corpus answers against the board
///
/// # Examples
/// ```
/// use wordle_assist::core::Board;
/// use wordle_assist::solver::{FilterResult, filter};
/// use wordle_assist::wordlists::{WordCorpus, loader::words_from_slice};
///
/// let corpus = WordCorpus::new(words_from_slice(&["crane", "crate", "slate"]), &[], &[]).unwrap();
/// let board = Board::from_guesses(&[("crane", "GG-G-")]).unwrap();
///
/// let FilterResult::Filtered(result) = filter(&board, &corpus) else {
///     panic!("first row is resolved");
/// };
/// assert_eq!(result.candidates.len(), 0);
/// assert_eq!(result.locked, [Some(b'c'), Some(b'r'), None, Some(b'n'), None]);
/// ```
#[must_use]
pub fn filter<'c>(board: &Board, corpus: &'c WordCorpus) -> FilterResult<'c> {
    match filter_with(board, corpus, |_| ControlFlow::<Infallible>::Continue(())) {
        ControlFlow::Continue(result) => result,
        ControlFlow::Break(never) => match never {},
    }
}

/// Filter with a hook called before each inspected cell
///
/// The hook receives progress and may stop the pass by returning `Break`,
/// in which case no partial result is produced.
pub fn filter_with<'c, B, F>(
    board: &Board,
    corpus: &'c WordCorpus,
    mut on_cell: F,
) -> ControlFlow<B, FilterResult<'c>>
where
    F: FnMut(Progress) -> ControlFlow<B>,
{
    if !board.is_row_resolved(0) {
        return ControlFlow::Continue(FilterResult::Unconstrained);
    }

    let mut candidates: Vec<&Word> = corpus.answers().iter().collect();
    let mut locked = [None; COLS];
    let mut locked_letters: FxHashSet<u8> = FxHashSet::default();
    let mut present_checked: FxHashSet<u8> = FxHashSet::default();

    for (row_idx, row) in board.rows().iter().enumerate() {
        if !board.is_row_resolved(row_idx) {
            continue;
        }

        for (col, cell) in row.iter().enumerate() {
            on_cell(Progress {
                done: row_idx * COLS + col,
                total: TOTAL_CELLS,
            })?;

            let Some(letter) = cell.letter else {
                continue;
            };

            match cell.state {
                LetterState::Correct => {
                    locked[col] = Some(letter);
                    locked_letters.insert(letter);
                    candidates.retain(|word| word.char_at(col) == letter);
                }
                LetterState::Present => {
                    if present_checked.insert(letter) {
                        candidates.retain(|word| word.has_letter(letter));
                    }
                }
                LetterState::Absent => {
                    if !locked_letters.contains(&letter) {
                        candidates.retain(|word| !word.has_letter(letter));
                    }
                }
                LetterState::Empty | LetterState::Pending => {}
            }
        }
    }

    log::debug!("filter kept {} of {} answers", candidates.len(), corpus.answers().len());

    ControlFlow::Continue(FilterResult::Filtered(Filtered { candidates, locked }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn corpus_of(answers: &[&str]) -> WordCorpus {
        WordCorpus::new(words_from_slice(answers), &[], &[]).unwrap()
    }

    fn filtered<'c>(board: &Board, corpus: &'c WordCorpus) -> Filtered<'c> {
        match filter(board, corpus) {
            FilterResult::Filtered(result) => result,
            FilterResult::Unconstrained => panic!("expected feedback to apply"),
        }
    }

    fn texts(result: &Filtered<'_>) -> Vec<String> {
        result
            .candidates
            .iter()
            .map(|w| w.text().to_string())
            .collect()
    }

    const POOL: &[&str] = &[
        "crane", "crate", "grape", "brave", "slate", "stare", "spare", "share", "shake", "snake",
        "sheep", "speed", "bleed", "green", "eerie", "robot", "floor", "motor", "tower", "lower",
    ];

    #[test]
    fn empty_board_is_unconstrained() {
        let corpus = corpus_of(POOL);
        assert_eq!(filter(&Board::new(), &corpus), FilterResult::Unconstrained);
    }

    #[test]
    fn pending_first_row_is_unconstrained() {
        let corpus = corpus_of(POOL);
        let mut board = Board::new();
        for ch in "crane".chars() {
            board.type_letter(ch);
        }
        assert_eq!(filter(&board, &corpus), FilterResult::Unconstrained);
    }

    #[test]
    fn locked_columns_and_absent_letter() {
        let corpus = corpus_of(&["crane", "crate", "grape", "brave"]);
        let board = Board::from_guesses(&[("crane", "GG-GG")]).unwrap();
        let result = filtered(&board, &corpus);

        assert_eq!(result.locked, [Some(b'c'), Some(b'r'), None, Some(b'n'), Some(b'e')]);
        // crane itself contains the absent 'a', so nothing survives
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn correct_constraint_keeps_matching_positions() {
        let corpus = corpus_of(&["crane", "crate", "grape", "brave"]);
        let board = Board::from_guesses(&[("crane", "-GG-G")]).unwrap();
        let result = filtered(&board, &corpus);

        assert_eq!(texts(&result), vec!["grape", "brave"]);
    }

    #[test]
    fn present_requires_letter_anywhere() {
        let corpus = corpus_of(POOL);
        let board = Board::from_guesses(&[("robot", "Y----")]).unwrap();
        let result = filtered(&board, &corpus);

        // 'r' kept even at the guessed position; o, b, t excluded
        for word in &result.candidates {
            assert!(word.has_letter(b'r'));
            assert!(!word.has_letter(b'o'));
            assert!(!word.has_letter(b'b'));
            assert!(!word.has_letter(b't'));
        }
        assert_eq!(texts(&result), vec!["crane", "grape", "spare", "share", "green", "eerie"]);
    }

    #[test]
    fn locked_letter_survives_later_absent() {
        let corpus = corpus_of(&["boxer", "vexed", "waxen", "crane", "proxy"]);
        let board = Board::from_guesses(&[("toxic", "--G--"), ("proxy", "-----")]).unwrap();
        let result = filtered(&board, &corpus);

        assert_eq!(result.locked[2], Some(b'x'));
        // 'x' absent at column 3 is ignored; p, r, o, y still eliminate
        assert_eq!(texts(&result), vec!["vexed", "waxen"]);
    }

    #[test]
    fn absent_before_lock_in_same_row_still_eliminates() {
        // Tiles are applied left to right: the first 'e' is absent before the
        // second 'e' gets locked, so every word with an 'e' is already gone.
        let corpus = corpus_of(&["sheep", "speed", "bleed", "crane"]);
        let board = Board::from_guesses(&[("eerie", "----G")]).unwrap();
        let result = filtered(&board, &corpus);

        assert_eq!(result.locked[4], Some(b'e'));
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn duplicate_letter_counts_are_not_tracked() {
        // Answer "crane", guess "eerie": exact rules give e(-) e(-) r(Y) i(-) e(G).
        // The first absent 'e' drops every word with an 'e', the answer included.
        let corpus = corpus_of(&["crane", "grape", "spare", "brave"]);
        let board = Board::from_guesses(&[("eerie", "--Y-G")]).unwrap();
        let result = filtered(&board, &corpus);
        assert!(result.candidates.is_empty());

        // Answer "crest", guess "creek": exact rules rule out a second 'e', but
        // the absent copy is skipped once 'e' is locked, so "creed" stays.
        let corpus = corpus_of(&["crest", "creed", "cream", "crane"]);
        let board = Board::from_guesses(&[("creek", "GGG--")]).unwrap();
        let result = filtered(&board, &corpus);
        assert_eq!(texts(&result), vec!["crest", "creed", "cream"]);
    }

    #[test]
    fn unresolved_later_rows_are_skipped() {
        let corpus = corpus_of(POOL);
        let mut board = Board::from_guesses(&[("crane", "-----")]).unwrap();
        let before = filtered(&board, &corpus);

        for ch in "sheep".chars() {
            board.type_letter(ch);
        }
        let after = filtered(&board, &corpus);
        assert_eq!(before, after);
    }

    #[test]
    fn repeated_present_letter_matches_single_present() {
        // Same absent letters in both rows; 'z' appears in no pool word
        let corpus = corpus_of(POOL);
        let once = Board::from_guesses(&[("spezd", "--Y--")]).unwrap();
        let twice = Board::from_guesses(&[("speed", "--YY-")]).unwrap();

        let once = filtered(&once, &corpus);
        assert_eq!(
            texts(&once),
            vec!["crane", "crate", "brave", "green", "eerie", "tower", "lower"]
        );
        assert_eq!(once.candidates, filtered(&twice, &corpus).candidates);
    }

    #[test]
    fn present_then_absent_drops_the_letter() {
        // Answer "crane", guess "speed": the second 'e' is Absent and 'e' is
        // not locked, so it eliminates every word with an 'e'.
        let corpus = corpus_of(POOL);
        let board = Board::from_guesses(&[("speed", "--Y--")]).unwrap();

        let result = filtered(&board, &corpus);
        assert!(result.candidates.is_empty());
        assert_eq!(result.locked, [None; COLS]);
    }

    #[test]
    fn progress_reports_every_cell_of_resolved_rows() {
        let corpus = corpus_of(POOL);
        let board = Board::from_guesses(&[("crane", "-----"), ("sheep", "-----")]).unwrap();

        let mut seen = Vec::new();
        let result = filter_with(&board, &corpus, |p| {
            seen.push(p);
            ControlFlow::<()>::Continue(())
        });

        assert!(matches!(result, ControlFlow::Continue(FilterResult::Filtered(_))));
        assert_eq!(seen.len(), 10);
        assert_eq!(seen[0], Progress { done: 0, total: TOTAL_CELLS });
        assert_eq!(seen[9], Progress { done: 9, total: TOTAL_CELLS });
    }

    #[test]
    fn break_aborts_without_result() {
        let corpus = corpus_of(POOL);
        let board = Board::from_guesses(&[("crane", "-----")]).unwrap();

        let mut calls = 0;
        let result = filter_with(&board, &corpus, |p| {
            calls += 1;
            if p.done == 2 {
                ControlFlow::Break("canceled")
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(result, ControlFlow::Break("canceled"));
        assert_eq!(calls, 3);
    }

    #[test]
    fn filtering_is_idempotent() {
        let corpus = corpus_of(POOL);
        let board = Board::from_guesses(&[("share", "-Y-YG"), ("green", "-GG--")]).unwrap();

        assert_eq!(filter(&board, &corpus), filter(&board, &corpus));
    }

    fn random_board(rng: &mut StdRng, rows: usize) -> Board {
        let states = ["G", "Y", "-"];
        let mut board = Board::new();
        for _ in 0..rows {
            let guess = POOL[rng.random_range(0..POOL.len())];
            let feedback: String = (0..COLS)
                .map(|_| states[rng.random_range(0..states.len())])
                .collect();
            let word = Word::new(guess).unwrap();
            let parsed = crate::core::parse_feedback(&feedback).unwrap();
            board.push_resolved(&word, parsed).unwrap();
        }
        board
    }

    #[test]
    fn random_boards_shrink_monotonically_and_respect_locks() {
        let corpus = corpus_of(POOL);
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let rows = rng.random_range(1..=ROWS);
            let full = random_board(&mut rng, rows);
            let result = filtered(&full, &corpus);
            assert!(result.candidates.len() <= corpus.answers().len());

            for word in &result.candidates {
                for (col, locked) in result.locked.iter().enumerate() {
                    if let Some(letter) = locked {
                        assert_eq!(word.char_at(col), *letter);
                    }
                }
            }

            // Dropping the last row never leaves fewer candidates
            if rows > 1 {
                let mut shorter = full.clone();
                while shorter.cursor().0 == rows {
                    shorter.backspace();
                }
                let prefix = filtered(&shorter, &corpus);
                assert!(result.candidates.len() <= prefix.candidates.len());
                for word in &result.candidates {
                    assert!(prefix.candidates.contains(word));
                }
            }
        }
    }
}
