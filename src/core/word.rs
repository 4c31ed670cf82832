//! Wordle word representation
//!
//! A Word stores a validated 5-letter lowercase word as bytes.

use std::fmt;

/// Vowels counted by the vowel heuristic (`y` excluded)
pub const VOWELS: [u8; 5] = *b"aeiou";

/// A 5-letter Wordle word
///
/// Always lowercase ASCII; construction normalizes case and rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; 5],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; 5] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Build a word from five letters, as read off a board row
    ///
    /// # Errors
    /// Same rules as [`Word::new`].
    pub fn from_letters(letters: [u8; 5]) -> Result<Self, WordError> {
        let text = String::from_utf8(letters.to_vec()).map_err(|_| WordError::NonAscii)?;
        Self::new(text)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of vowels in the word, duplicates included
    #[must_use]
    pub fn vowel_count(&self) -> u32 {
        self.chars.iter().filter(|ch| VOWELS.contains(ch)).count() as u32
    }

    /// Letters of the word with duplicates removed, in first-seen order
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<u8> {
        let mut seen = 0u32;
        let mut letters = Vec::with_capacity(5);
        for &ch in &self.chars {
            let bit = 1 << (ch - b'a');
            if seen & bit == 0 {
                seen |= bit;
                letters.push(ch);
            }
        }
        letters
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
