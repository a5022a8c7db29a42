//! Word list command

use crate::context::GameContext;
use crate::core::Word;
use crate::output::print_word_list;
use crate::wordlists::WordCorpus;

/// Solutions in alphabetical order
///
/// Game ids follow the deployment's shuffled order, not this one.
#[must_use]
pub fn sorted_solutions(corpus: &WordCorpus) -> Vec<&Word> {
    let mut words: Vec<&Word> = corpus.solutions().iter().collect();
    words.sort_unstable();
    words
}

/// Print every possible solution
pub fn run_list(ctx: &GameContext) {
    print_word_list(&sorted_solutions(ctx.corpus()), ctx.corpus().dictionary_len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn list_is_sorted_regardless_of_id_order() {
        let corpus = WordCorpus::new(
            words_from_slice(&["audio"]),
            words_from_slice(&["trace", "crane", "slate", "cadet"]),
        )
        .shuffled(7);

        let words: Vec<&str> = sorted_solutions(&corpus).iter().map(|w| w.as_str()).collect();
        assert_eq!(words, ["CADET", "CRANE", "SLATE", "TRACE"]);
    }
}
