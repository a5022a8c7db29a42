//! Display functions for game pages

use super::formatters::{HintView, alphabet_rows, ending_text, guess_row, used_letters};
use crate::config::GameConfig;
use crate::core::Word;
use crate::error::GameError;
use crate::session::{Ending, GameState, Phase};
use colored::Colorize;

/// Print the whole page for a game in progress or just ended
pub fn print_game(state: &GameState, candidates: &[&Word], config: &GameConfig) {
    let phase = state.phase(config.max_guesses);
    let color = state.color_enabled();

    println!("\n{}", "─".repeat(40).cyan());
    println!(" {}", "GUESSES".bright_cyan().bold());
    println!("{}", "─".repeat(40).cyan());

    if state.guesses().is_empty() {
        println!("Waiting for first guess");
    }
    for (i, guess) in state.guesses().iter().enumerate() {
        println!("{}", guess_row(i + 1, guess, color));
    }

    if let Phase::Ended(ending) = phase {
        print_ending(ending, color);
    }

    println!("\n {}", "ALPHABET".bright_cyan().bold());
    println!("Used letters are underlined");
    for row in alphabet_rows(used_letters(state.guesses()), color) {
        println!("{row}");
    }

    match phase {
        Phase::Ended(_) => println!(
            "\nGame ended.\nThe word was {}",
            state.secret().as_str().bright_yellow().bold()
        ),
        Phase::InProgress => {
            println!("\nShow word hints: {}", yes_no(state.hints_enabled()).bold());
            println!("Color: {}", yes_no(color).bold());
        }
    }

    println!("\n {}", "STATS".bright_cyan().bold());
    println!("Game Id: #{}", state.solution_id());
    println!("Guesses: {}/{}", state.guesses().len(), config.max_guesses);

    if !phase.is_over() {
        println!("\nNumber of possible words remaining: {}", candidates.len());
        print_hints(&HintView::new(
            candidates,
            state.hints_enabled(),
            config.hint_limit,
        ));
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

fn print_ending(ending: Ending, color: bool) {
    let text = format!("Game ended. You {}", ending_text(ending));
    let banner = match ending {
        Ending::Won if color => text.green().bold(),
        Ending::Lost if color => text.red().bold(),
        Ending::GaveUp if color => text.yellow().bold(),
        _ => text.bold(),
    };
    println!("{banner}");
}

fn print_hints(view: &HintView<'_>) {
    match view {
        HintView::Disabled => println!(
            "{}",
            "Word hints disabled. Enable them to list every word still possible.".italic()
        ),
        HintView::TooMany { limit } => println!(
            "{}",
            format!("Word hints enabled. Words are shown once {limit} or fewer remain.").italic()
        ),
        HintView::Words(words) => {
            let list: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
            println!("Words: {}", list.join(" "));
        }
    }
}

/// Print the screen shown when there is no game
pub fn print_start(solution_count: usize) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {}", "WORDLE".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());
    println!("No game in progress. Start one with an id from 1 to {solution_count}.");
}

/// Print a player-facing error message
pub fn print_error(error: GameError) {
    println!("{}", format!("❌ {error}").red().bold());
}

/// Print the token to submit with the next request
pub fn print_token(token: &str) {
    println!("\n{}", "State:".bright_black());
    println!("{token}");
}

/// Print the solution list in display order
pub fn print_word_list(words: &[&Word], dictionary_len: usize) {
    println!("\n {}", "WORD LIST".bright_cyan().bold());
    println!("Known words: {dictionary_len}");
    println!("Possible solutions: {}\n", words.len());
    for chunk in words.chunks(8) {
        let line: Vec<&str> = chunk.iter().map(|w| w.as_str()).collect();
        println!("{}", line.join(" "));
    }
    println!("\n{}", "The words do not map directly to game ids".italic());
}
