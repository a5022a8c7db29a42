//! Core domain types for the game
//!
//! Words, letter sets, per-letter scoring and the guess record. Everything here
//! is pure and deterministic, so a state decoded from a token can be replayed
//! and re-scored with identical results.

mod guess;
mod letters;
mod score;
mod word;

pub use guess::Guess;
pub use letters::LetterSet;
pub use score::{LetterResult, Score};
pub use word::{WORD_LEN, Word, WordError};
