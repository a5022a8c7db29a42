//! The word corpus a deployment plays with
//!
//! Loaded once at startup and read-only afterwards. Solution ids are 1-based
//! positions in the solution list, so the order of that list must stay fixed
//! for the lifetime of a deployment.

use super::loader::{load_from_file, words_from_slice};
use super::{DICTIONARY, SOLUTIONS};
use crate::core::Word;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// File in the lists directory holding every guessable word
pub const DICTIONARY_FILE: &str = "ALL.TXT";

/// File in the lists directory holding the possible solutions
pub const SOLUTIONS_FILE: &str = "SOLUTION.TXT";

/// Dictionary plus ordered solution list
#[derive(Debug, Clone)]
pub struct WordCorpus {
    dictionary: FxHashSet<Word>,
    solutions: Vec<Word>,
}

impl WordCorpus {
    /// Build a corpus from word lists
    ///
    /// Duplicate solutions keep their first position. Every solution is also
    /// accepted as a guess, even if the dictionary list forgot it.
    pub fn new(
        dictionary: impl IntoIterator<Item = Word>,
        solutions: impl IntoIterator<Item = Word>,
    ) -> Self {
        let mut dictionary: FxHashSet<Word> = dictionary.into_iter().collect();
        let mut seen = FxHashSet::default();
        let solutions: Vec<Word> = solutions
            .into_iter()
            .filter(|word| seen.insert(*word))
            .collect();

        dictionary.extend(solutions.iter().copied());

        Self {
            dictionary,
            solutions,
        }
    }

    /// Load `ALL.TXT` and `SOLUTION.TXT` from `dir`
    ///
    /// A list missing from the directory falls back to its embedded default.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a list file exists but cannot be read.
    pub fn load(dir: &Path) -> io::Result<Self> {
        let dictionary = load_or_embedded(&dir.join(DICTIONARY_FILE), DICTIONARY)?;
        let solutions = load_or_embedded(&dir.join(SOLUTIONS_FILE), SOLUTIONS)?;
        let corpus = Self::new(dictionary, solutions);

        log::info!(
            "loaded {} known words and {} solutions",
            corpus.dictionary.len(),
            corpus.solutions.len()
        );

        Ok(corpus)
    }

    /// Reorder the solutions with a fixed seed
    ///
    /// Keeps game ids from mapping onto the alphabetical list. The same seed
    /// always gives the same order, across `rand` releases too.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.solutions.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        self
    }

    #[must_use]
    pub fn is_known_word(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Solution for a 1-based game id
    #[must_use]
    pub fn solution_at(&self, id: usize) -> Option<&Word> {
        id.checked_sub(1).and_then(|index| self.solutions.get(index))
    }

    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    #[must_use]
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

fn load_or_embedded(path: &Path, fallback: &[&str]) -> io::Result<Vec<Word>> {
    match load_from_file(path) {
        Ok(words) => {
            log::debug!("read {} words from {}", words.len(), path.display());
            Ok(words)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(words_from_slice(fallback)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn embedded() -> WordCorpus {
        WordCorpus::new(words(DICTIONARY), words(SOLUTIONS))
    }

    #[test]
    fn solutions_are_one_based() {
        let corpus = WordCorpus::new(words(&["slate"]), words(&["crane", "cadet"]));

        assert_eq!(corpus.solution_count(), 2);
        assert_eq!(corpus.solution_at(1), Some(&word("crane")));
        assert_eq!(corpus.solution_at(2), Some(&word("cadet")));
        assert_eq!(corpus.solution_at(0), None);
        assert_eq!(corpus.solution_at(3), None);
    }

    #[test]
    fn solutions_are_known_words() {
        let corpus = WordCorpus::new(words(&["slate"]), words(&["crane"]));

        assert!(corpus.is_known_word(&word("slate")));
        assert!(corpus.is_known_word(&word("CRANE")));
        assert!(!corpus.is_known_word(&word("zzzzz")));
        assert_eq!(corpus.dictionary_len(), 2);
    }

    #[test]
    fn duplicate_solutions_keep_first_position() {
        let corpus = WordCorpus::new(
            Vec::new(),
            words(&["crane", "slate", "CRANE", "cadet"]),
        );
        assert_eq!(corpus.solutions(), words(&["crane", "slate", "cadet"]).as_slice());
    }

    #[test]
    fn shuffle_is_deterministic_per_seed() {
        let corpus = embedded();
        let a = corpus.clone().shuffled(7);
        let b = corpus.clone().shuffled(7);

        assert_eq!(a.solutions(), b.solutions());
        assert_ne!(a.solutions(), corpus.solutions());

        let mut sorted_a = a.solutions().to_vec();
        let mut sorted_orig = corpus.solutions().to_vec();
        sorted_a.sort();
        sorted_orig.sort();
        assert_eq!(sorted_a, sorted_orig);
    }

    #[test]
    fn shuffle_uses_the_portable_generator() {
        let corpus = embedded();
        let mut expected = corpus.solutions().to_vec();
        expected.shuffle(&mut ChaCha8Rng::seed_from_u64(0x5EED));

        assert_eq!(corpus.shuffled(0x5EED).solutions(), expected.as_slice());
    }

    #[test]
    fn load_prefers_files_and_falls_back_to_embedded() {
        let dir = std::env::temp_dir().join(format!(
            "stateless-wordle-corpus-{}-{:x}",
            std::process::id(),
            rand::random::<u32>()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SOLUTIONS_FILE), "crane\ncadet\n").unwrap();

        let corpus = WordCorpus::load(&dir).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(corpus.solutions(), words(&["crane", "cadet"]).as_slice());
        // Dictionary came from the embedded list
        assert!(corpus.dictionary_len() >= DICTIONARY.len());
    }

    #[test]
    fn embedded_corpus_is_complete() {
        let corpus = embedded();
        assert_eq!(corpus.solution_count(), SOLUTIONS.len());
        assert!(corpus.solutions().iter().all(|w| corpus.is_known_word(w)));
    }
}
