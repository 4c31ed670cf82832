//! Word list loading utilities
//!
//! Loads corpora from plain text files (one word per line) or converts the
//! embedded constants.

use super::CorpusError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are skipped. Entries that are not valid five-letter words are
/// dropped with a warning.
///
/// # Errors
///
/// Returns [`CorpusError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    log::info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(e) => {
                log::warn!("skipping word list entry {line:?}: {e}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
/// use wordle_assist::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
