//! Error types shared across the crate

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors a player can see, each with a short message for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid game id")]
    InvalidId,
    #[error("Word not found in list")]
    UnknownWord,
    #[error("Word already guessed")]
    DuplicateGuess,
    #[error("No guesses left")]
    GuessLimitReached,
    #[error("Invalid game action")]
    InvalidAction,
    #[error("Game has ended, start a new one")]
    GameOver,
}

/// Why an incoming token was rejected
///
/// Never shown to the player: the controller treats both the same way, as if
/// no game had been sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token authentication tag mismatch")]
    Forged,
    #[error("token is malformed")]
    Malformed,
}

/// Problems with the server key
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("key material must be {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("HMAC-SHA256 rejected the MAC half of the key")]
    MacKey,
    #[error("key file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl KeyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
