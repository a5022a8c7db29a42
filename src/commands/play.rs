//! Interactive console game
//!
//! Every turn goes through the same form handling as a one-shot request, and
//! the only thing kept between turns is the sealed token.

use super::turn::{submit, submit_educated, submit_new};
use crate::context::GameContext;
use crate::game::{Form, RandomSource, SystemRandom};
use colored::Colorize;
use std::io::{self, Write};

/// A line typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    New(Option<&'a str>),
    Educated,
    /// Solve and the preference toggles, by form mode
    Mode(&'static str),
    Guess(&'a str),
}

impl<'a> Command<'a> {
    /// Commands start with `/` so they never shadow a five-letter guess
    fn parse(input: &'a str) -> Option<Self> {
        let input = input.trim();
        let Some(command) = input.strip_prefix('/') else {
            return (!input.is_empty()).then_some(Self::Guess(input));
        };

        let mut parts = command.split_whitespace();
        let name = parts.next()?.to_ascii_lowercase();
        match name.as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::New(parts.next())),
            "auto" | "educated" => Some(Self::Educated),
            "solve" => Some(Self::Mode("solve")),
            "hint" | "hints" => Some(Self::Mode("hint")),
            "color" => Some(Self::Mode("color")),
            _ => None,
        }
    }
}

/// Run the interactive game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or a state
/// cannot be sealed.
pub fn run_play(ctx: &GameContext) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Console Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Type a five-letter word to guess it.");
    println!("Commands:");
    println!("  /new [id]   start a new game (random id if none given)");
    println!("  /auto       make an educated guess");
    println!("  /hint       toggle the list of possible words");
    println!("  /color      toggle colored tiles");
    println!("  /solve      give up and reveal the word");
    println!("  /quit       leave\n");

    let mut rng = SystemRandom;
    let mut token = submit_new(ctx, None, &mut rng)?;

    loop {
        let Some(input) = get_user_input("Guess or command")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        let Some(command) = Command::parse(&input) else {
            println!("{}", "Unknown command".red());
            continue;
        };

        if command == Command::Quit {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        token = step(ctx, command, token, &mut rng)?;
    }
}

/// Apply one command and return the token to carry into the next turn
///
/// A `/new` with an id that names no game leaves the current game in place.
fn step(
    ctx: &GameContext,
    command: Command<'_>,
    token: Option<String>,
    rng: &mut impl RandomSource,
) -> Result<Option<String>, String> {
    match command {
        Command::Quit => Ok(token),
        Command::New(id) => {
            let next = submit_new(ctx, id, rng)?;
            if next.is_none() && token.is_some() {
                println!("Keeping the current game");
            }
            Ok(next.or(token))
        }
        Command::Educated => match token.as_deref() {
            Some(current) => submit_educated(ctx, current, rng),
            None => {
                println!("Start a game first with /new");
                Ok(None)
            }
        },
        Command::Mode(mode) => submit(
            ctx,
            &Form {
                mode: Some(mode),
                state: token.as_deref(),
                ..Form::default()
            },
        ),
        Command::Guess(word) => submit(
            ctx,
            &Form {
                mode: Some("guess"),
                state: token.as_deref(),
                guess: Some(word),
                ..Form::default()
            },
        ),
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then(|| input.trim().to_string()))
}
