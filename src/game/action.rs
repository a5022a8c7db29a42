//! Player actions and the raw form fields they arrive in

use crate::error::GameError;

/// Something the player asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start the game with this 1-based solution id
    New(usize),
    /// Guess a word, as typed
    Guess(String),
    /// Give up and reveal the secret
    Solve,
    ToggleHints,
    ToggleColor,
}

/// Form fields submitted with a request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Form<'a> {
    pub mode: Option<&'a str>,
    pub state: Option<&'a str>,
    pub id: Option<&'a str>,
    pub guess: Option<&'a str>,
}

impl Action {
    /// Interpret the form's `mode` and its fields
    ///
    /// # Errors
    /// `InvalidAction` for an unknown or missing mode, `InvalidId` when a new
    /// game is requested without a positive numeric id.
    pub fn from_form(form: &Form<'_>) -> Result<Self, GameError> {
        match form.mode.map(str::trim) {
            Some("new") => parse_id(form.id).map(Self::New),
            Some("guess") => Ok(Self::Guess(form.guess.unwrap_or_default().to_string())),
            Some("solve") => Ok(Self::Solve),
            Some("hint") => Ok(Self::ToggleHints),
            Some("color") => Ok(Self::ToggleColor),
            _ => Err(GameError::InvalidAction),
        }
    }
}

fn parse_id(raw: Option<&str>) -> Result<usize, GameError> {
    raw.and_then(|id| id.trim().parse::<usize>().ok())
        .filter(|&id| id > 0)
        .ok_or(GameError::InvalidId)
}
