//! Word lists for the game
//!
//! Embedded default lists, file loading, and the [`WordCorpus`] built from them.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{DICTIONARY_FILE, SOLUTIONS_FILE, WordCorpus};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
