//! Stateless Wordle
//!
//! A Wordle engine that keeps no server-side session. The whole game travels
//! with the client as an encrypted, authenticated token and every request is
//! handled from that token alone.
//!
//! # Quick Start
//!
//! ```rust
//! use stateless_wordle::core::{Score, Word};
//!
//! let guess = Word::new("tests").unwrap();
//! let secret = Word::new("cadet").unwrap();
//!
//! let score = Score::evaluate(&guess, &secret);
//! assert_eq!(score.to_code(), "YY---");
//! ```

// Core domain types
pub mod core;

// Candidate filtering
pub mod filter;

// Sealed game state
pub mod session;

// Request handling
pub mod game;

// Word lists
pub mod wordlists;

pub mod config;
pub mod context;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use config::GameConfig;
pub use context::GameContext;
pub use error::{GameError, KeyError, TokenError};
