//! Per-tile letter state and feedback notation
//!
//! Every board cell carries one `LetterState`. Only the three feedback states
//! take part in filtering; `Empty` and `Pending` are entry states.
//!
//! Feedback can be written as text, one character per tile:
//! - 'G'/'g'/🟩 for correct (green)
//! - 'Y'/'y'/🟨 for present (yellow)
//! - '-'/'_'/⬜ for absent (gray)

/// State of a single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterState {
    /// No letter typed yet
    #[default]
    Empty,
    /// Letter typed, guess not submitted yet
    Pending,
    /// Right letter, right position
    Correct,
    /// Letter is in the word at another position
    Present,
    /// Letter is not in the word
    Absent,
}

impl LetterState {
    /// True for Correct, Present and Absent
    #[inline]
    #[must_use]
    pub const fn is_feedback(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }

    /// Next state in the manual toggle cycle Absent → Present → Correct → Absent
    ///
    /// Entry states have no successor.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::LetterState;
    ///
    /// assert_eq!(LetterState::Absent.cycled(), Some(LetterState::Present));
    /// assert_eq!(LetterState::Correct.cycled(), Some(LetterState::Absent));
    /// assert_eq!(LetterState::Pending.cycled(), None);
    /// ```
    #[must_use]
    pub const fn cycled(self) -> Option<Self> {
        match self {
            Self::Absent => Some(Self::Present),
            Self::Present => Some(Self::Correct),
            Self::Correct => Some(Self::Absent),
            Self::Empty | Self::Pending => None,
        }
    }

    /// Parse one feedback character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Emoji tile for feedback states, blank square otherwise
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Empty | Self::Pending => '▫',
        }
    }
}

/// Parse a full feedback string like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// # Examples
/// ```
/// use wordle_assist::core::{LetterState, parse_feedback};
///
/// let p1 = parse_feedback("GY-gy").unwrap();
/// let p2 = parse_feedback("🟩🟨⬜🟩🟨").unwrap();
/// assert_eq!(p1, p2);
/// assert_eq!(p1[2], LetterState::Absent);
/// ```
#[must_use]
pub fn parse_feedback(s: &str) -> Option<[LetterState; 5]> {
    let states: Vec<LetterState> = s
        .trim()
        .chars()
        .map(LetterState::from_char)
        .collect::<Option<_>>()?;

    states.try_into().ok()
}

/// Render a row of states as emoji
#[must_use]
pub fn feedback_to_emoji(states: &[LetterState; 5]) -> String {
    states.iter().map(|s| s.to_emoji()).collect()
}
