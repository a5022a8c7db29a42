//! Constraints derived from a single scored guess

use crate::core::{Guess, LetterResult, LetterSet, WORD_LEN, Word};

/// What a scored guess says about one position of the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Nothing known about this position
    Any,
    /// The secret has exactly this letter here
    Fixed(u8),
    /// The secret has this letter, but not here
    NotHere(u8),
}

impl Slot {
    const fn admits(self, letter: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Fixed(expected) => letter == expected,
            Self::NotHere(forbidden) => letter != forbidden,
        }
    }
}

/// Everything one guess rules in or out
///
/// A letter is only excluded when none of its occurrences in the guess scored
/// a hit, so guessing a doubled letter never over-excludes.
///
/// This deliberately does not track letter multiplicity: guessing TASTY and
/// seeing a single T lit does not rule out candidates with two T's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessConstraint {
    word: Word,
    slots: [Slot; WORD_LEN],
    excluded: LetterSet,
    included: LetterSet,
}

impl GuessConstraint {
    #[must_use]
    pub fn from_guess(guess: &Guess) -> Self {
        let word = *guess.word();
        let mut slots = [Slot::Any; WORD_LEN];
        let mut hits = LetterSet::EMPTY;
        let mut included = LetterSet::EMPTY;

        for ((slot, &letter), result) in slots
            .iter_mut()
            .zip(word.letters())
            .zip(guess.score().results())
        {
            match result {
                LetterResult::ExactMatch => {
                    *slot = Slot::Fixed(letter);
                    hits.insert(letter);
                }
                LetterResult::PresentElsewhere => {
                    *slot = Slot::NotHere(letter);
                    hits.insert(letter);
                    included.insert(letter);
                }
                LetterResult::NoMatch => {}
            }
        }

        let excluded = word
            .letters()
            .iter()
            .copied()
            .filter(|&letter| !hits.contains(letter))
            .collect();

        Self {
            word,
            slots,
            excluded,
            included,
        }
    }

    /// Whether `candidate` is still a possible secret after this guess
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        if *candidate == self.word {
            return false;
        }

        let positions_ok = self
            .slots
            .iter()
            .zip(candidate.letters())
            .all(|(slot, &letter)| slot.admits(letter));

        if !positions_ok {
            return false;
        }

        let letters = candidate.letter_set();
        letters.is_disjoint(self.excluded) && self.included.is_subset(letters)
    }
}
