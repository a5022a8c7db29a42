//! Per-letter scoring of a guess against a secret word
//!
//! A score holds one `LetterResult` per position. Its compact text form uses
//! one character per letter:
//! - `-` = no match (letter not in the secret, or all occurrences already used)
//! - `Y` = present elsewhere (letter in the secret, wrong position)
//! - `G` = exact match (letter in the correct position)

use super::{WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of scoring a single letter
///
/// Variant order is display priority only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    NoMatch,
    PresentElsewhere,
    ExactMatch,
}

impl LetterResult {
    /// Compact code used in tokens and on the command line
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::NoMatch => '-',
            Self::PresentElsewhere => 'Y',
            Self::ExactMatch => 'G',
        }
    }

    /// Parse a compact code; only the exact `G`, `Y` and `-` are accepted
    #[must_use]
    pub const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' => Some(Self::ExactMatch),
            'Y' => Some(Self::PresentElsewhere),
            '-' => Some(Self::NoMatch),
            _ => None,
        }
    }
}

/// Feedback for a whole guess, one result per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Score([LetterResult; WORD_LEN]);

impl Score {
    /// Score `guess` against `secret`
    ///
    /// Duplicate letters are handled the way the game shows them: a letter
    /// guessed twice only lights up as many times as it occurs in the secret.
    ///
    /// # Algorithm
    /// 1. Exact matches: mark them and consume the letter on both sides
    /// 2. Elsewhere matches: for each remaining guess letter, consume one
    ///    unconsumed occurrence in the secret if there is one
    ///
    /// # Examples
    /// ```
    /// use stateless_wordle::core::{Score, Word};
    ///
    /// let guess = Word::new("tests").unwrap();
    /// let secret = Word::new("cadet").unwrap();
    ///
    /// // Only one T in CADET, so the second T stays unlit
    /// assert_eq!(Score::evaluate(&guess, &secret).to_code(), "YY---");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let mut results = [LetterResult::NoMatch; WORD_LEN];
        let mut guess_left = (*guess.letters()).map(Some);
        let mut secret_left = (*secret.letters()).map(Some);

        for (i, (g, s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
            if g == s {
                results[i] = LetterResult::ExactMatch;
                guess_left[i] = None;
                secret_left[i] = None;
            }
        }

        for (result, pending) in results.iter_mut().zip(guess_left) {
            let Some(letter) = pending else { continue };
            if let Some(slot) = secret_left.iter_mut().find(|slot| **slot == Some(letter)) {
                *result = LetterResult::PresentElsewhere;
                *slot = None;
            }
        }

        Self(results)
    }

    #[inline]
    #[must_use]
    pub const fn results(&self) -> &[LetterResult; WORD_LEN] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        let mut i = 0;
        while i < WORD_LEN {
            if !matches!(self.0[i], LetterResult::ExactMatch) {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Parse a score from its wire form, e.g. "GY-GY"
    ///
    /// # Examples
    /// ```
    /// use stateless_wordle::core::Score;
    ///
    /// let score = Score::from_code("GY-GY").unwrap();
    /// assert_eq!(score.to_string(), "GY-GY");
    /// assert!(Score::from_code("GYG").is_none());
    /// ```
    #[must_use]
    pub fn from_code(s: &str) -> Option<Self> {
        let mut results = [LetterResult::NoMatch; WORD_LEN];
        let mut chars = s.chars();

        for slot in &mut results {
            *slot = LetterResult::from_code(chars.next()?)?;
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(results))
    }

    #[must_use]
    pub fn to_code(self) -> String {
        self.0.iter().map(|r| r.code()).collect()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("Invalid score string: {s}"))
    }
}

impl TryFrom<String> for Score {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Score> for String {
    fn from(score: Score) -> Self {
        score.to_code()
    }
}
