//! Stateless Wordle - CLI
//!
//! Play interactively, or drive single requests by passing the state token
//! printed by the previous one.

use anyhow::{Result, anyhow, ensure};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use stateless_wordle::{
    GameConfig, GameContext,
    commands::{run_list, run_play, submit, submit_educated, submit_new},
    config::{DEFAULT_HINT_LIMIT, DEFAULT_MAX_GUESSES},
    game::{Form, SystemRandom},
    output::print_token,
};

#[derive(Parser)]
#[command(
    name = "stateless_wordle",
    about = "Wordle with the whole game sealed in a client-held token",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding ALL.TXT, SOLUTION.TXT and the key file
    #[arg(short, long, global = true, env = "WORDLE_LISTS", default_value = "lists")]
    lists: PathBuf,

    /// Guesses allowed per game
    #[arg(long, global = true, env = "WORDLE_MAX_GUESSES", default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Only list hint words once this few remain
    #[arg(long, global = true, env = "WORDLE_HINT_LIMIT", default_value_t = DEFAULT_HINT_LIMIT)]
    hint_limit: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console game (default)
    Play,

    /// Start a new game
    New {
        /// Game id (random if omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Guess a word
    Guess {
        /// State token from the previous request
        #[arg(short, long)]
        state: String,

        /// The word to guess
        word: String,
    },

    /// Guess a random word that is still possible
    Educated {
        #[arg(short, long)]
        state: String,
    },

    /// Give up and reveal the word
    Solve {
        #[arg(short, long)]
        state: String,
    },

    /// Toggle the list of possible words
    Hints {
        #[arg(short, long)]
        state: String,
    },

    /// Toggle colored tiles
    Color {
        #[arg(short, long)]
        state: String,
    },

    /// Show every possible solution
    List,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ensure!(cli.max_guesses > 0, "--max-guesses must be at least 1");

    let config = GameConfig::new(cli.max_guesses, cli.hint_limit);
    let ctx = GameContext::open(&cli.lists, config)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let mut rng = SystemRandom;
    let token = match command {
        Commands::Play => return run_play(&ctx).map_err(|e| anyhow!(e)),
        Commands::List => {
            run_list(&ctx);
            return Ok(());
        }
        Commands::New { id } => submit_new(&ctx, id.as_deref(), &mut rng),
        Commands::Guess { state, word } => submit(
            &ctx,
            &Form {
                guess: Some(&word),
                ..form("guess", &state)
            },
        ),
        Commands::Educated { state } => submit_educated(&ctx, &state, &mut rng),
        Commands::Solve { state } => submit(&ctx, &form("solve", &state)),
        Commands::Hints { state } => submit(&ctx, &form("hint", &state)),
        Commands::Color { state } => submit(&ctx, &form("color", &state)),
    }
    .map_err(|e| anyhow!(e))?;

    if let Some(token) = token {
        print_token(&token);
    }
    Ok(())
}

fn form<'a>(mode: &'a str, state: &'a str) -> Form<'a> {
    Form {
        mode: Some(mode),
        state: Some(state),
        ..Form::default()
    }
}
