//! Word check command

use crate::core::{Word, WordError};
use crate::wordlists::WordCorpus;

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    /// Accepted as a guess
    pub valid: bool,
    /// In the answer pool
    pub answer: bool,
}

/// Check whether `word` may be guessed and whether it can be the answer
///
/// # Errors
///
/// Returns an error if `word` is not five ASCII letters.
pub fn check_word(corpus: &WordCorpus, word: &str) -> Result<CheckResult, WordError> {
    let word = Word::new(word)?;
    let valid = corpus.is_valid_guess(word.text());
    let answer = valid && corpus.answers().contains(&word);

    Ok(CheckResult {
        word: word.text().to_string(),
        valid,
        answer,
    })
}
