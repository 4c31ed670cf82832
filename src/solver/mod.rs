//! Suggestion pipeline
//!
//! Board feedback is turned into a candidate set by [`filter`], candidates are
//! scored and ranked by [`score`] and [`Ranking`], and [`SuggestionEngine`]
//! runs the pipeline in the background with cancellation.

mod engine;
mod filter;
mod scorer;

pub use engine::{
    CancelToken, EngineConfig, EngineEvent, NO_CANDIDATES_REASON, Outcome, SuggestionEngine,
    Suggestions, Update, compute,
};
pub use filter::{FilterResult, Filtered, Progress, TOTAL_CELLS, filter, filter_with};
pub use scorer::{LetterStats, Metric, Ranking, TOP_N, WordStat, score, score_word, top_by};
