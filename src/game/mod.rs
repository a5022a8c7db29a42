//! Game flow
//!
//! The per-request state machine: decode the incoming token, apply one action,
//! hand back the next state for rendering and re-encoding.

mod action;
mod controller;
mod random;

pub use action::{Action, Form};
pub use controller::{GameController, Turn};
pub use random::{RandomSource, SystemRandom};

#[cfg(test)]
pub(crate) use random::ScriptedRandom;
