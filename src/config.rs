//! Game configuration

/// Number of guesses a player gets by default
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Hint lists are only shown once this few candidates remain
pub const DEFAULT_HINT_LIMIT: usize = 200;

/// Name of the key file inside the lists directory
pub const KEY_FILE: &str = "key.bin";

/// Rules and display limits shared by every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub hint_limit: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_guesses: usize, hint_limit: usize) -> Self {
        Self {
            max_guesses,
            hint_limit,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GUESSES, DEFAULT_HINT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_classic_rules() {
        let config = GameConfig::default();
        assert_eq!(config.max_guesses, 6);
        assert_eq!(config.hint_limit, 200);
    }
}
