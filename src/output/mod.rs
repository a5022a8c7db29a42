//! Terminal output formatting
//!
//! Renders game pages: the guess board, the alphabet panel, stats and hints.

pub mod display;
pub mod formatters;

pub use display::{print_error, print_game, print_start, print_token, print_word_list};
