//! The game state carried inside a session token

use crate::core::{Guess, Word};
use serde::{Deserialize, Serialize};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Won,
    Lost,
    GaveUp,
}

/// Game phase derived from a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Ended(Ending),
}

impl Phase {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Ended(_))
    }
}

/// Everything needed to continue a game, held by the client between requests
///
/// The secret is stored next to its solution id so decoding never has to touch
/// the corpus. Display preferences travel with the game rather than being
/// stored globally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(rename = "id")]
    solution_id: usize,
    #[serde(rename = "word")]
    secret: Word,
    guesses: Vec<Guess>,
    solved: bool,
    #[serde(rename = "hints", default)]
    hints_enabled: bool,
    #[serde(rename = "color", default)]
    color_enabled: bool,
}

impl GameState {
    /// Fresh game: no guesses, hints off, color on
    pub(crate) const fn new(solution_id: usize, secret: Word) -> Self {
        Self {
            solution_id,
            secret,
            guesses: Vec::new(),
            solved: false,
            hints_enabled: false,
            color_enabled: true,
        }
    }

    #[must_use]
    pub const fn solution_id(&self) -> usize {
        self.solution_id
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// True once the player gave up and the secret was revealed
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub const fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    #[must_use]
    pub const fn color_enabled(&self) -> bool {
        self.color_enabled
    }

    #[must_use]
    pub fn has_guessed(&self, word: &Word) -> bool {
        self.guesses.iter().any(|g| g.word() == word)
    }

    #[must_use]
    pub fn phase(&self, max_guesses: usize) -> Phase {
        if self.solved {
            Phase::Ended(Ending::GaveUp)
        } else if self.guesses.last().is_some_and(Guess::is_win) {
            Phase::Ended(Ending::Won)
        } else if self.guesses.len() >= max_guesses {
            Phase::Ended(Ending::Lost)
        } else {
            Phase::InProgress
        }
    }

    /// Structural invariants every state must satisfy
    ///
    /// Ids are 1-based, no word is guessed twice, nothing follows a winning
    /// guess, and a given-up game ends with the revealed secret.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        if self.solution_id == 0 {
            return false;
        }

        let win_before_end = self
            .guesses
            .iter()
            .rev()
            .skip(1)
            .any(Guess::is_win);

        let duplicate = self
            .guesses
            .iter()
            .enumerate()
            .any(|(i, g)| self.guesses[..i].iter().any(|prev| prev.word() == g.word()));

        let scores_match = self
            .guesses
            .iter()
            .all(|g| *g == Guess::new(*g.word(), &self.secret));

        let reveal_ok =
            !self.solved || self.guesses.last().is_some_and(|g| *g.word() == self.secret);

        !win_before_end && !duplicate && scores_match && reveal_ok
    }

    pub(crate) fn push_guess(&mut self, word: Word) -> &Guess {
        self.guesses.push(Guess::new(word, &self.secret));
        &self.guesses[self.guesses.len() - 1]
    }

    /// Reveal the secret as a synthetic self-matching guess
    pub(crate) fn give_up(&mut self) {
        self.guesses.push(Guess::new(self.secret, &self.secret));
        self.solved = true;
    }

    pub(crate) fn toggle_hints(&mut self) {
        self.hints_enabled = !self.hints_enabled;
    }

    pub(crate) fn toggle_color(&mut self) {
        self.color_enabled = !self.color_enabled;
    }
}
