//! The static word corpus shared by every computation

use super::embedded::{ALLOWED, ANSWERS, COMMON};
use super::loader::words_from_slice;
use crate::core::Word;
use crate::solver::{LetterStats, Ranking, WordStat, score_word};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Errors raised while building a corpus
#[derive(Debug)]
pub enum CorpusError {
    Io { path: PathBuf, source: io::Error },
    EmptyAnswers,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
            Self::EmptyAnswers => write!(f, "Answer list contains no valid words"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::EmptyAnswers => None,
        }
    }
}

/// Answer pool, accepted guesses and static per-word data
///
/// Read-only once built. The ranking of the unfiltered answer pool is computed
/// on first use and cached.
#[derive(Debug)]
pub struct WordCorpus {
    answers: Vec<Word>,
    valid: FxHashSet<String>,
    common: FxHashMap<String, u32>,
    letters: LetterStats,
    initial: OnceLock<Arc<Ranking>>,
}

impl WordCorpus {
    /// Build a corpus
    ///
    /// `answers` keeps its order (duplicates dropped). Accepted guesses are
    /// `answers` plus `allowed`. `common` lists words from most to least
    /// common; the first entry scores `common.len()`, the last scores 1 and
    /// unlisted words score 0.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::EmptyAnswers`] when no answers remain.
    pub fn new(answers: Vec<Word>, allowed: &[Word], common: &[&str]) -> Result<Self, CorpusError> {
        let mut seen = FxHashSet::default();
        let total = answers.len();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();
        if answers.len() < total {
            log::warn!("dropped {} duplicate answers", total - answers.len());
        }
        if answers.is_empty() {
            return Err(CorpusError::EmptyAnswers);
        }

        let mut valid = seen;
        valid.extend(allowed.iter().map(|word| word.text().to_string()));

        let mut scores = FxHashMap::default();
        let mut score = u32::try_from(common.len()).unwrap_or(u32::MAX);
        for entry in common {
            let key = entry.trim().to_ascii_lowercase();
            if !valid.contains(&key) {
                log::warn!("common word {key:?} is not in the corpus");
            }
            scores.entry(key).or_insert(score);
            score = score.saturating_sub(1);
        }

        let letters = LetterStats::from_words(&answers);
        log::info!(
            "corpus ready: {} answers, {} accepted guesses, {} ranked by commonness",
            answers.len(),
            valid.len(),
            scores.len()
        );

        Ok(Self {
            answers,
            valid,
            common: scores,
            letters,
            initial: OnceLock::new(),
        })
    }

    /// Corpus built from the lists compiled into the binary
    ///
    /// # Errors
    ///
    /// Only fails if the embedded answer list is empty.
    pub fn embedded() -> Result<Self, CorpusError> {
        Self::new(words_from_slice(ANSWERS), &words_from_slice(ALLOWED), COMMON)
    }

    /// Possible answers in corpus order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Whether `guess` may be submitted
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::WordCorpus;
    ///
    /// let corpus = WordCorpus::embedded().unwrap();
    /// assert!(corpus.is_valid_guess("CRANE"));
    /// assert!(!corpus.is_valid_guess("xqzzy"));
    /// ```
    #[must_use]
    pub fn is_valid_guess(&self, guess: &str) -> bool {
        self.valid.contains(&guess.trim().to_ascii_lowercase())
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    #[must_use]
    pub fn commonness(&self, word: &Word) -> u32 {
        self.common.get(word.text()).copied().unwrap_or(0)
    }

    /// Letter statistics over the full answer pool
    #[must_use]
    pub const fn letter_stats(&self) -> &LetterStats {
        &self.letters
    }

    /// Ranking of the unfiltered answer pool
    pub fn initial_ranking(&self) -> Arc<Ranking> {
        Arc::clone(self.initial.get_or_init(|| {
            log::debug!("computing initial ranking over {} answers", self.answers.len());
            let stats: Vec<WordStat> = self
                .answers
                .par_iter()
                .map(|word| score_word(word, &self.letters, self))
                .collect();
            Arc::new(Ranking::from_stats(&stats))
        }))
    }
}
