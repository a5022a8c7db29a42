//! Per-request game state machine

use super::action::{Action, Form};
use super::random::RandomSource;
use crate::config::GameConfig;
use crate::core::Word;
use crate::error::GameError;
use crate::filter::CandidateFilter;
use crate::session::{GameState, SessionCodec};
use crate::wordlists::WordCorpus;

/// Result of handling one request
///
/// No state means there is no game to show and the player has to start one;
/// an error is a short message to display next to whatever state is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    pub state: Option<GameState>,
    pub error: Option<GameError>,
}

impl Turn {
    const fn playing(state: GameState) -> Self {
        Self {
            state: Some(state),
            error: None,
        }
    }

    const fn rejected(state: Option<GameState>, error: GameError) -> Self {
        Self {
            state,
            error: Some(error),
        }
    }
}

/// Interprets actions against a decoded or fresh game
///
/// Holds only shared read-only references; every request gets its complete
/// state from the token it carries.
pub struct GameController<'a> {
    corpus: &'a WordCorpus,
    codec: &'a SessionCodec,
    config: &'a GameConfig,
}

impl<'a> GameController<'a> {
    #[must_use]
    pub const fn new(
        corpus: &'a WordCorpus,
        codec: &'a SessionCodec,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            corpus,
            codec,
            config,
        }
    }

    /// Handle a raw form submission
    #[must_use]
    pub fn handle_form(&self, form: &Form<'_>) -> Turn {
        match Action::from_form(form) {
            Ok(action) => self.handle(action, form.state),
            Err(GameError::InvalidAction) => Turn::rejected(
                form.state.and_then(|token| self.open(token)),
                GameError::InvalidAction,
            ),
            Err(error) => Turn::rejected(None, error),
        }
    }

    /// Apply `action` to the game carried by `token`
    ///
    /// A missing, forged or malformed token is indistinguishable from no
    /// token at all: anything but a new game then yields an empty turn.
    #[must_use]
    pub fn handle(&self, action: Action, token: Option<&str>) -> Turn {
        if let Action::New(id) = action {
            return match self.start(id) {
                Ok(state) => Turn::playing(state),
                Err(error) => Turn::rejected(None, error),
            };
        }

        let Some(mut state) = token.and_then(|token| self.open(token)) else {
            return Turn::default();
        };

        match self.apply(&mut state, action) {
            Ok(()) => Turn::playing(state),
            Err(error) => Turn::rejected(Some(state), error),
        }
    }

    /// Fresh game for a 1-based solution id
    ///
    /// # Errors
    /// `InvalidId` unless `1 <= id <= solution_count`.
    pub fn start(&self, id: usize) -> Result<GameState, GameError> {
        self.corpus
            .solution_at(id)
            .map(|secret| GameState::new(id, *secret))
            .ok_or(GameError::InvalidId)
    }

    /// Decode a token, or `None` if it cannot be trusted
    #[must_use]
    pub fn open(&self, token: &str) -> Option<GameState> {
        match self.codec.decrypt(token.trim()) {
            Ok(state) if state.guesses().len() <= self.config.max_guesses => Some(state),
            Ok(_) => {
                log::debug!("discarding session with more guesses than allowed");
                None
            }
            Err(e) => {
                log::debug!("discarding session token: {e}");
                None
            }
        }
    }

    /// Apply one action to `state`
    ///
    /// On error the state is left untouched.
    ///
    /// # Errors
    /// Returns the `GameError` explaining why the action was refused.
    pub fn apply(&self, state: &mut GameState, action: Action) -> Result<(), GameError> {
        match action {
            Action::New(id) => {
                *state = self.start(id)?;
                Ok(())
            }
            Action::Guess(text) => self.guess(state, &text),
            Action::Solve => {
                self.ensure_in_progress(state)?;
                state.give_up();
                Ok(())
            }
            Action::ToggleHints => {
                self.ensure_in_progress(state)?;
                state.toggle_hints();
                Ok(())
            }
            Action::ToggleColor => {
                self.ensure_in_progress(state)?;
                state.toggle_color();
                Ok(())
            }
        }
    }

    fn guess(&self, state: &mut GameState, text: &str) -> Result<(), GameError> {
        if state.guesses().len() >= self.config.max_guesses {
            return Err(GameError::GuessLimitReached);
        }
        self.ensure_in_progress(state)?;

        let word = Word::new(text.trim()).map_err(|_| GameError::UnknownWord)?;
        if !self.corpus.is_known_word(&word) {
            return Err(GameError::UnknownWord);
        }
        if state.has_guessed(&word) {
            return Err(GameError::DuplicateGuess);
        }

        let id = state.solution_id();
        let score = state.push_guess(word).score();
        log::debug!("game #{id} guess {word} scored {score}");
        Ok(())
    }

    fn ensure_in_progress(&self, state: &GameState) -> Result<(), GameError> {
        if state.phase(self.config.max_guesses).is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }

    /// Pick a random valid game id
    pub fn random_id(&self, rng: &mut impl RandomSource) -> Option<usize> {
        match self.corpus.solution_count() {
            0 => None,
            count => Some(rng.pick(count) + 1),
        }
    }

    /// Solutions still consistent with the guesses so far
    #[must_use]
    pub fn candidates(&self, state: &GameState) -> Vec<&'a Word> {
        CandidateFilter::new(self.corpus.solutions()).filter(state.guesses())
    }

    /// Pick one of the remaining candidates at random
    pub fn educated_guess(&self, state: &GameState, rng: &mut impl RandomSource) -> Option<Word> {
        let candidates = self.candidates(state);
        if candidates.is_empty() {
            return None;
        }
        Some(*candidates[rng.pick(candidates.len())])
    }
}
