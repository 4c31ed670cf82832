//! Heuristic scoring of candidate words
//!
//! Every candidate gets four independent statistics, each measured against the
//! current candidate set (or the static corpus), and the top entries per
//! statistic become the suggestion lists.

use crate::core::{COLS, Word};
use crate::wordlists::WordCorpus;
use rayon::prelude::*;
use std::fmt;

/// Number of suggestions kept per metric
pub const TOP_N: usize = 6;

/// Letter counts over a set of words
///
/// `positional[p][l]` counts words with letter `l` at position `p`;
/// `overall[l]` counts words containing `l` at least once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterStats {
    positional: [[u32; 26]; COLS],
    overall: [u32; 26],
    words: usize,
}

impl LetterStats {
    /// Count letters over `words`
    pub fn from_words<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut positional = [[0u32; 26]; COLS];
        let mut overall = [0u32; 26];
        let mut count = 0;

        for word in words {
            count += 1;
            for (pos, &ch) in word.chars().iter().enumerate() {
                positional[pos][letter_index(ch)] += 1;
            }
            for ch in word.distinct_letters() {
                overall[letter_index(ch)] += 1;
            }
        }

        Self {
            positional,
            overall,
            words: count,
        }
    }

    /// Words with `letter` at `position`
    #[inline]
    #[must_use]
    pub fn positional(&self, position: usize, letter: u8) -> u32 {
        self.positional[position][letter_index(letter)]
    }

    /// Words containing `letter`
    #[inline]
    #[must_use]
    pub fn overall(&self, letter: u8) -> u32 {
        self.overall[letter_index(letter)]
    }

    /// Number of words counted
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// Heuristic statistics of one word against a candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStat {
    pub word: String,
    /// Sum of positional letter frequencies
    pub greens: u32,
    /// Sum of overall frequencies of distinct letters
    pub yellows: u32,
    /// Number of vowels (a, e, i, o, u)
    pub vowels: u32,
    /// Static commonness score
    pub common: u32,
}

/// Score one word against precomputed letter statistics
#[must_use]
pub fn score_word(word: &Word, stats: &LetterStats, corpus: &WordCorpus) -> WordStat {
    let greens = word
        .chars()
        .iter()
        .enumerate()
        .map(|(pos, &ch)| stats.positional(pos, ch))
        .sum();
    let yellows = word
        .distinct_letters()
        .into_iter()
        .map(|ch| stats.overall(ch))
        .sum();

    WordStat {
        word: word.text().to_string(),
        greens,
        yellows,
        vowels: word.vowel_count(),
        common: corpus.commonness(word),
    }
}

/// Score every candidate against the candidate set itself
///
/// Output order matches `candidates`.
#[must_use]
pub fn score(candidates: &[&Word], corpus: &WordCorpus) -> Vec<WordStat> {
    let stats = LetterStats::from_words(candidates.iter().copied());

    candidates
        .par_iter()
        .map(|word| score_word(word, &stats, corpus))
        .collect()
}

/// The four ranking heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Greens,
    Yellows,
    Vowels,
    Common,
}

impl Metric {
    /// All metrics in display order
    pub const ALL: [Self; 4] = [Self::Greens, Self::Yellows, Self::Vowels, Self::Common];

    /// Heading shown above the list
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Greens => "Most Greens",
            Self::Yellows => "Most Yellows",
            Self::Vowels => "Most Vowels",
            Self::Common => "Most Common",
        }
    }

    #[must_use]
    pub const fn value(self, stat: &WordStat) -> u32 {
        match self {
            Self::Greens => stat.greens,
            Self::Yellows => stat.yellows,
            Self::Vowels => stat.vowels,
            Self::Common => stat.common,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Select the top `n` stats by `metric`, highest first
///
/// The sort is stable: ties keep their input order.
#[must_use]
pub fn top_by(stats: &[WordStat], metric: Metric, n: usize) -> Vec<WordStat> {
    let mut sorted: Vec<&WordStat> = stats.iter().collect();
    sorted.sort_by(|a, b| metric.value(b).cmp(&metric.value(a)));
    sorted.into_iter().take(n).cloned().collect()
}

/// Top suggestions for each metric
///
/// A word may appear under several metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    greens: Vec<WordStat>,
    yellows: Vec<WordStat>,
    vowels: Vec<WordStat>,
    common: Vec<WordStat>,
}

impl Ranking {
    /// Rank scored candidates, keeping [`TOP_N`] per metric
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::solver::{Metric, Ranking, WordStat};
    ///
    /// let stat = |word: &str, vowels| WordStat {
    ///     word: word.to_string(),
    ///     greens: 0,
    ///     yellows: 0,
    ///     vowels,
    ///     common: 0,
    /// };
    /// let ranking = Ranking::from_stats(&[stat("crwth", 0), stat("audio", 4)]);
    /// assert_eq!(ranking.top(Metric::Vowels)[0].word, "audio");
    /// // Ties keep input order
    /// assert_eq!(ranking.top(Metric::Greens)[0].word, "crwth");
    /// ```
    #[must_use]
    pub fn from_stats(stats: &[WordStat]) -> Self {
        Self {
            greens: top_by(stats, Metric::Greens, TOP_N),
            yellows: top_by(stats, Metric::Yellows, TOP_N),
            vowels: top_by(stats, Metric::Vowels, TOP_N),
            common: top_by(stats, Metric::Common, TOP_N),
        }
    }

    #[must_use]
    pub fn top(&self, metric: Metric) -> &[WordStat] {
        match metric {
            Metric::Greens => &self.greens,
            Metric::Yellows => &self.yellows,
            Metric::Vowels => &self.vowels,
            Metric::Common => &self.common,
        }
    }

    /// `(metric, list)` pairs in display order
    pub fn lists(&self) -> impl Iterator<Item = (Metric, &[WordStat])> {
        Metric::ALL.into_iter().map(|metric| (metric, self.top(metric)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn corpus(answers: &[&str], common: &[&str]) -> WordCorpus {
        WordCorpus::new(words_from_slice(answers), &[], common).unwrap()
    }

    fn stat<'a>(stats: &'a [WordStat], word: &str) -> &'a WordStat {
        stats.iter().find(|s| s.word == word).unwrap()
    }

    #[test]
    fn letter_stats_count_words_not_occurrences() {
        let words = words_from_slice(&["speed", "crane"]);
        let stats = LetterStats::from_words(&words);

        assert_eq!(stats.word_count(), 2);
        assert_eq!(stats.overall(b'e'), 2); // speed counts once
        assert_eq!(stats.positional(2, b'e'), 1);
        assert_eq!(stats.positional(3, b'e'), 1);
        assert_eq!(stats.positional(4, b'e'), 1);
        assert_eq!(stats.overall(b'z'), 0);
    }

    #[test]
    fn greens_sum_positional_frequencies() {
        let corpus = corpus(&["crane", "crate", "grape"], &[]);
        let refs: Vec<&Word> = corpus.answers().iter().collect();
        let stats = score(&refs, &corpus);

        // c:2 r:3 a:3 n:1 e:3
        assert_eq!(stat(&stats, "crane").greens, 12);
        // g:1 r:3 a:3 p:1 e:3
        assert_eq!(stat(&stats, "grape").greens, 11);
    }

    #[test]
    fn yellows_count_distinct_letters_once() {
        let corpus = corpus(&["sheep", "speed", "crane"], &[]);
        let refs: Vec<&Word> = corpus.answers().iter().collect();
        let stats = score(&refs, &corpus);

        // s:2 h:1 e:3 p:2 (second e ignored)
        assert_eq!(stat(&stats, "sheep").yellows, 8);
    }

    #[test]
    fn vowels_and_common_are_static() {
        let corpus = corpus(&["audio", "crane", "nymph"], &["crane", "audio"]);
        let refs: Vec<&Word> = corpus.answers().iter().collect();
        let stats = score(&refs, &corpus);

        assert_eq!(stat(&stats, "audio").vowels, 4);
        assert_eq!(stat(&stats, "nymph").vowels, 0);
        assert_eq!(stat(&stats, "crane").common, 2);
        assert_eq!(stat(&stats, "audio").common, 1);
        assert_eq!(stat(&stats, "nymph").common, 0);
    }

    #[test]
    fn score_preserves_candidate_order() {
        let corpus = corpus(&["crane", "brave", "grape", "crate"], &[]);
        let refs: Vec<&Word> = corpus.answers().iter().rev().collect();
        let stats = score(&refs, &corpus);

        let order: Vec<&str> = stats.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(order, vec!["crate", "grape", "brave", "crane"]);
    }

    #[test]
    fn top_by_is_stable_and_truncates() {
        let stats: Vec<WordStat> = (0..10)
            .map(|i| WordStat {
                word: format!("w{i}"),
                greens: if i % 2 == 0 { 5 } else { 1 },
                yellows: 0,
                vowels: 0,
                common: 0,
            })
            .collect();

        let top = top_by(&stats, Metric::Greens, TOP_N);
        let words: Vec<&str> = top.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["w0", "w2", "w4", "w6", "w8", "w1"]);
    }

    #[test]
    fn ranking_lists_may_overlap() {
        let corpus = corpus(&["audio", "crane"], &["audio"]);
        let refs: Vec<&Word> = corpus.answers().iter().collect();
        let ranking = Ranking::from_stats(&score(&refs, &corpus));

        assert_eq!(ranking.top(Metric::Vowels)[0].word, "audio");
        assert_eq!(ranking.top(Metric::Common)[0].word, "audio");
        assert!(ranking.lists().all(|(_, list)| list.len() == 2));
    }

    #[test]
    fn ranking_is_reproducible() {
        let corpus = corpus(&["crane", "crate", "grape", "brave", "slate", "stare", "spare"], &[]);
        let refs: Vec<&Word> = corpus.answers().iter().collect();

        let first = Ranking::from_stats(&score(&refs, &corpus));
        let second = Ranking::from_stats(&score(&refs, &corpus));
        assert_eq!(first, second);
        assert_eq!(first.top(Metric::Greens).len(), TOP_N);
    }

    #[test]
    fn metric_labels() {
        let labels: Vec<String> = Metric::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            labels,
            vec!["Most Greens", "Most Yellows", "Most Vowels", "Most Common"]
        );
    }
}
