//! One-shot form submissions
//!
//! Each call is one request: decode the submitted state, apply the action,
//! render the page and hand back the token for the next request.

use crate::context::GameContext;
use crate::game::{Form, RandomSource, Turn};
use crate::output::{print_error, print_game, print_start};

/// Render a turn and seal its state for the next request
///
/// Returns `None` when there is no game to continue.
///
/// # Errors
///
/// Returns an error if the state cannot be serialized.
pub fn show_turn(ctx: &GameContext, turn: &Turn) -> Result<Option<String>, String> {
    let Some(state) = &turn.state else {
        print_start(ctx.corpus().solution_count());
        if let Some(error) = turn.error {
            print_error(error);
        }
        return Ok(None);
    };

    print_game(state, &ctx.controller().candidates(state), ctx.config());
    if let Some(error) = turn.error {
        print_error(error);
    }

    ctx.codec()
        .encrypt(state)
        .map(Some)
        .map_err(|e| e.to_string())
}

/// Submit a raw form
///
/// # Errors
///
/// Returns an error if the resulting state cannot be serialized.
pub fn submit(ctx: &GameContext, form: &Form<'_>) -> Result<Option<String>, String> {
    let turn = ctx.controller().handle_form(form);
    show_turn(ctx, &turn)
}

/// Start a game, picking a random id when none is given
///
/// # Errors
///
/// Returns an error if the new state cannot be serialized.
pub fn submit_new(
    ctx: &GameContext,
    id: Option<&str>,
    rng: &mut impl RandomSource,
) -> Result<Option<String>, String> {
    let id = match id {
        Some(id) => id.to_string(),
        None => ctx
            .controller()
            .random_id(rng)
            .map_or_else(String::new, |id| id.to_string()),
    };

    submit(
        ctx,
        &Form {
            mode: Some("new"),
            id: Some(&id),
            ..Form::default()
        },
    )
}

/// Guess a random word that is still possible
///
/// # Errors
///
/// Returns an error if the resulting state cannot be serialized.
pub fn submit_educated(
    ctx: &GameContext,
    token: &str,
    rng: &mut impl RandomSource,
) -> Result<Option<String>, String> {
    let controller = ctx.controller();
    let guess = controller
        .open(token)
        .and_then(|state| controller.educated_guess(&state, rng))
        .map(|word| word.to_string());

    submit(
        ctx,
        &Form {
            mode: Some("guess"),
            state: Some(token),
            guess: guess.as_deref(),
            ..Form::default()
        },
    )
}
