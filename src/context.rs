//! Process-wide, read-only game context
//!
//! Built once at startup and passed by reference into every request. Holds
//! the corpus, the codec with the server key, and the configuration; nothing
//! in it changes after construction.

use crate::config::{GameConfig, KEY_FILE};
use crate::game::GameController;
use crate::session::{KeyStore, SessionCodec};
use crate::wordlists::WordCorpus;
use anyhow::{Context, Result};
use std::path::Path;

pub struct GameContext {
    corpus: WordCorpus,
    codec: SessionCodec,
    config: GameConfig,
}

impl GameContext {
    #[must_use]
    pub const fn new(corpus: WordCorpus, codec: SessionCodec, config: GameConfig) -> Self {
        Self {
            corpus,
            codec,
            config,
        }
    }

    /// Set up from a lists directory
    ///
    /// Loads or creates the key file, loads the word lists and fixes the
    /// deployment's solution order from the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key file or a word list cannot be read or created.
    pub fn open(lists_dir: &Path, config: GameConfig) -> Result<Self> {
        let key = KeyStore::load_or_create(&lists_dir.join(KEY_FILE))
            .context("failed to load the server key")?;

        let corpus = WordCorpus::load(lists_dir)
            .with_context(|| format!("failed to load word lists from {}", lists_dir.display()))?
            .shuffled(key.ordering_seed());

        let codec = SessionCodec::new(&key).context("failed to set up the session codec")?;

        Ok(Self::new(corpus, codec, config))
    }

    #[must_use]
    pub const fn controller(&self) -> GameController<'_> {
        GameController::new(&self.corpus, &self.codec, &self.config)
    }

    #[must_use]
    pub const fn corpus(&self) -> &WordCorpus {
        &self.corpus
    }

    #[must_use]
    pub const fn codec(&self) -> &SessionCodec {
        &self.codec
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::KEY_LEN;
    use std::fs;

    #[test]
    fn context_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameContext>();
    }

    #[test]
    fn open_creates_key_and_keeps_solution_order() {
        let dir = std::env::temp_dir().join(format!(
            "stateless-wordle-context-{}-{:x}",
            std::process::id(),
            rand::random::<u32>()
        ));

        let first = GameContext::open(&dir, GameConfig::default()).unwrap();
        assert_eq!(fs::read(dir.join(KEY_FILE)).unwrap().len(), KEY_LEN);

        let second = GameContext::open(&dir, GameConfig::default()).unwrap();
        assert_eq!(first.corpus().solutions(), second.corpus().solutions());

        // A token from one process start opens in the next
        let state = first.controller().start(1).unwrap();
        let token = first.codec().encrypt(&state).unwrap();
        assert_eq!(second.controller().open(&token), Some(state));

        fs::remove_dir_all(dir).unwrap();
    }
}
