//! A scored guess as stored in the game state

use super::{Score, Word};
use serde::{Deserialize, Serialize};

/// One accepted guess and its score against the secret
///
/// Created once per accepted guess and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    word: Word,
    score: Score,
}

impl Guess {
    /// Score `word` against `secret` and record the result
    #[must_use]
    pub fn new(word: Word, secret: &Word) -> Self {
        Self {
            score: Score::evaluate(&word, secret),
            word,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// True when this guess found the secret
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.score.is_perfect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_scores_on_creation() {
        let secret = Word::new("crane").unwrap();
        let guess = Guess::new(Word::new("crate").unwrap(), &secret);

        assert_eq!(guess.word().as_str(), "CRATE");
        assert_eq!(guess.score().to_code(), "GGG-G");
        assert!(!guess.is_win());
    }

    #[test]
    fn guessing_the_secret_wins() {
        let secret = Word::new("crane").unwrap();
        assert!(Guess::new(secret, &secret).is_win());
    }

    #[test]
    fn serializes_as_word_and_code() {
        let secret = Word::new("cadet").unwrap();
        let guess = Guess::new(Word::new("tests").unwrap(), &secret);
        let json = serde_json::to_string(&guess).unwrap();
        assert_eq!(json, r#"{"word":"TESTS","score":"YY---"}"#);
    }
}
