//! Candidate filtering
//!
//! Narrows the solution list to the words still consistent with every guess
//! made so far. Each guess is turned into a [`GuessConstraint`] and applied to
//! the survivors of the previous guess, so the result never grows.

mod constraint;

pub use constraint::{GuessConstraint, Slot};

use crate::core::{Guess, Word};
use rayon::prelude::*;

/// Filters a solution list against a guess history
pub struct CandidateFilter<'a> {
    solutions: &'a [Word],
}

impl<'a> CandidateFilter<'a> {
    #[must_use]
    pub const fn new(solutions: &'a [Word]) -> Self {
        Self { solutions }
    }

    /// Words still possible after `guesses`, in alphabetical order
    ///
    /// # Examples
    /// ```
    /// use stateless_wordle::core::{Guess, Word};
    /// use stateless_wordle::filter::CandidateFilter;
    ///
    /// let solutions: Vec<Word> = ["crane", "crate", "crave", "slate"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let secret = Word::new("crane").unwrap();
    /// let history = [Guess::new(Word::new("crate").unwrap(), &secret)];
    ///
    /// let remaining = CandidateFilter::new(&solutions).filter(&history);
    /// let texts: Vec<&str> = remaining.iter().map(|w| w.as_str()).collect();
    /// assert_eq!(texts, ["CRANE", "CRAVE"]);
    /// ```
    #[must_use]
    pub fn filter(&self, guesses: &[Guess]) -> Vec<&'a Word> {
        let mut remaining: Vec<&'a Word> = self.solutions.iter().collect();
        remaining.sort_unstable();
        remaining.dedup();

        for guess in guesses {
            let constraint = GuessConstraint::from_guess(guess);
            remaining = remaining
                .into_par_iter()
                .filter(|candidate| constraint.admits(candidate))
                .collect();

            if remaining.is_empty() {
                break;
            }
        }

        remaining
    }

    /// Count how many candidates remain given the history
    #[must_use]
    pub fn count(&self, guesses: &[Guess]) -> usize {
        self.filter(guesses).len()
    }
}
