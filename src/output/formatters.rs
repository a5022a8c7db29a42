//! Formatting utilities for terminal output

use crate::core::{Guess, LetterResult, LetterSet, Word};
use crate::session::Ending;
use colored::{ColoredString, Colorize};

/// Letters per row of the alphabet panel
pub const ALPHABET_ROW: usize = 7;

/// A single board tile
///
/// The text style tells results apart on its own; color adds a background.
#[must_use]
pub fn tile(letter: u8, result: LetterResult, color: bool) -> ColoredString {
    let text = format!(" {} ", char::from(letter));
    match result {
        LetterResult::ExactMatch if color => text.bold().black().on_green(),
        LetterResult::ExactMatch => text.bold(),
        LetterResult::PresentElsewhere if color => text.underline().black().on_yellow(),
        LetterResult::PresentElsewhere => text.underline(),
        LetterResult::NoMatch => text.italic(),
    }
}

/// One board row: the guess number followed by its tiles
#[must_use]
pub fn guess_row(number: usize, guess: &Guess, color: bool) -> String {
    let score = guess.score();
    let mut row = format!("{}", format!("{number:>2} ").white().on_red());
    for (&letter, &result) in guess.word().letters().iter().zip(score.results()) {
        row.push_str(&tile(letter, result, color).to_string());
    }
    row
}

/// Every letter that appears in at least one guess
#[must_use]
pub fn used_letters(guesses: &[Guess]) -> LetterSet {
    guesses
        .iter()
        .fold(LetterSet::EMPTY, |used, g| used.union(g.word().letter_set()))
}

/// The alphabet panel, used letters underlined (and green with color on)
#[must_use]
pub fn alphabet_rows(used: LetterSet, color: bool) -> Vec<String> {
    (b'A'..=b'Z')
        .collect::<Vec<u8>>()
        .chunks(ALPHABET_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&letter| {
                    let text = format!(" {} ", char::from(letter));
                    match (used.contains(letter), color) {
                        (true, true) => text.underline().black().on_green().to_string(),
                        (true, false) => text.underline().to_string(),
                        (false, _) => text,
                    }
                })
                .collect()
        })
        .collect()
}

/// Last word of "Game ended. You ..."
#[must_use]
pub const fn ending_text(ending: Ending) -> &'static str {
    match ending {
        Ending::Won => "win",
        Ending::Lost => "lose",
        Ending::GaveUp => "gave up",
    }
}

/// What the hint area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintView<'a> {
    Disabled,
    /// Hints are on but too many candidates remain to list them
    TooMany { limit: usize },
    Words(Vec<&'a Word>),
}

impl<'a> HintView<'a> {
    #[must_use]
    pub fn new(candidates: &[&'a Word], hints_enabled: bool, limit: usize) -> Self {
        if !hints_enabled {
            Self::Disabled
        } else if candidates.len() > limit {
            Self::TooMany { limit }
        } else {
            Self::Words(candidates.to_vec())
        }
    }
}
