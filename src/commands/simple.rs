//! Simple interactive CLI mode
//!
//! Line-based driver around a `Session`: shows the recommendation, reads the
//! guess actually played and its feedback, and repeats until solved.

use crate::core::Word;
use crate::error::SolverError;
use crate::output::formatters::{format_candidates, format_history, format_knowledge};
use crate::solver::{Session, SessionStatus};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed when at most this many remain
const SHOW_CANDIDATES_LIMIT: usize = 10;

enum Command {
    Quit,
    NewGame,
    Undo,
    Text(String),
}

/// Run the simple interactive CLI mode, reading lines from `reader`
///
/// End of input is treated as `quit`.
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<R: BufRead>(session: &mut Session<'_>, mut reader: R) -> Result<()> {
    let length = session.config().word_length;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Partition Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Loaded {} words.", session.dictionary().len());
    println!("After each guess, enter the feedback as {length} characters:\n");
    println!("  - c = correct letter, correct position");
    println!("  - l = letter in the word, wrong position");
    println!("  - i = letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    loop {
        match session.status() {
            SessionStatus::Exhausted => {
                println!(
                    "\n{}",
                    "❌ No candidates remain! Your feedback may be incorrect.".red()
                );
                println!("Type 'undo' to go back, or 'new' to start over.\n");

                match read_command(&mut reader, "Command")? {
                    Command::Quit => return Ok(()),
                    Command::NewGame => new_game(session),
                    Command::Undo => undo(session),
                    Command::Text(_) => {}
                }
                continue;
            }
            SessionStatus::Solved => {
                println!("\n{}", "═".repeat(62).bright_cyan());
                println!(
                    "  {} in {} {}",
                    "🎉 Solved".bright_green().bold(),
                    session.history().len().to_string().bright_cyan().bold(),
                    if session.history().len() == 1 {
                        "guess"
                    } else {
                        "guesses"
                    }
                );
                println!("{}", format_history(session.history()));
                println!("{}\n", "═".repeat(62).bright_cyan());

                match read_command(&mut reader, "Play again? (yes/no)")? {
                    Command::Text(answer) if matches!(answer.as_str(), "yes" | "y") => {
                        new_game(session);
                        continue;
                    }
                    Command::NewGame => {
                        new_game(session);
                        continue;
                    }
                    Command::Undo => {
                        undo(session);
                        continue;
                    }
                    Command::Quit | Command::Text(_) => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            SessionStatus::InProgress => {}
        }

        let recommended = session.recommended_guess()?;
        let turn = session.history().len() + 1;

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", session.active().len());
        if !session.history().is_empty() {
            println!("Known: {}", format_knowledge(session.constraints()));
        }
        println!("────────────────────────────────────────────────────────────");
        println!(
            "\n📊 Suggested guess: {}",
            recommended.text().to_uppercase().bright_yellow().bold()
        );
        if let Some(metric) = session.recommended_metric() {
            println!(
                "   Expected remain:  {:.1} candidates\n",
                metric as f64 / session.active().len() as f64
            );
        }

        if session.active().len() <= SHOW_CANDIDATES_LIMIT {
            println!("Remaining candidates:");
            println!("{}\n", format_candidates(session.active()));
        }

        let guess = match read_command(&mut reader, "Guess played (Enter for suggestion)")? {
            Command::Quit => return Ok(()),
            Command::NewGame => {
                new_game(session);
                continue;
            }
            Command::Undo => {
                undo(session);
                continue;
            }
            Command::Text(text) if text.is_empty() => recommended.clone(),
            Command::Text(text) => match Word::with_length(text, length) {
                Ok(word) => word,
                Err(e) => {
                    println!("❌ {e}\n");
                    continue;
                }
            },
        };

        loop {
            let feedback = match read_command(&mut reader, "Enter feedback (c/l/i)")? {
                Command::Quit => return Ok(()),
                Command::NewGame => {
                    new_game(session);
                    break;
                }
                Command::Undo => {
                    undo(session);
                    break;
                }
                Command::Text(text) => text,
            };

            match session.submit_guess(&guess, &feedback) {
                Ok(()) | Err(SolverError::NoCandidatesRemaining) => break,
                Err(e) => println!("❌ {e}\n"),
            }
        }
    }
}

fn new_game(session: &mut Session<'_>) {
    session.reset();
    println!("\n🔄 New game started!\n");
}

fn undo(session: &mut Session<'_>) {
    match session.undo() {
        Some(record) => println!(
            "✓ Undone {}! Back to turn {}\n",
            record.guess.text().to_uppercase(),
            session.history().len() + 1
        ),
        None => println!("Nothing to undo!\n"),
    }
}

fn read_command<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Command> {
    let Some(input) = get_user_input(reader, prompt)? else {
        return Ok(Command::Quit);
    };

    Ok(match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Command::Quit,
        "new" | "n" => Command::NewGame,
        "undo" | "u" => Command::Undo,
        other => Command::Text(other.to_string()),
    })
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead>(reader: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("failed to read input")?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
