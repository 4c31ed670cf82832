//! Word lists and the shared corpus
//!
//! The default lists are compiled into the binary by the build script; custom
//! lists can be loaded from files.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{CorpusError, WordCorpus};
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, COMMON, COMMON_COUNT};
