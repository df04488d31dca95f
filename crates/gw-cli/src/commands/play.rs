use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use gw_core::{Catalog, Person};
use gw_engine::{ExhaustReason, GameConfig, GameError, GameSession, SessionStatus, Transcript};

/// How a single game ended from the console's point of view.
enum Outcome {
    Finished(Transcript),
    Stopped,
}

pub fn run(catalog: Option<&Path>, budget: u32, transcript: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let config = GameConfig::default().with_budget(budget);

    println!("  {} Guess Who!", "Welcome to".bold());
    println!("  Think of one of the {} people in the catalog.", catalog.len());
    println!("  I have {} questions to work out who it is.", config.budget);
    println!("  Type 'remaining' to see who is left, 'stop' to give up.");

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let mut games = Vec::new();

    loop {
        match play_one(&mut reader, &catalog, &config)? {
            Outcome::Finished(game) => {
                games.push(game);
                if let Some(path) = transcript {
                    write_transcripts(path, &games)?;
                }
            }
            Outcome::Stopped => {
                println!("\n  Game stopped. Goodbye!");
                return Ok(());
            }
        }

        match ask_yes_no(&mut reader, "\nWould you like to play again? (Y/N) ")? {
            Some(true) => println!("\n{}", "=".repeat(50)),
            Some(false) => {
                println!("Thanks for playing Guess Who!");
                return Ok(());
            }
            None => return Ok(()),
        }
    }
}

fn play_one(
    reader: &mut impl BufRead,
    catalog: &Catalog,
    config: &GameConfig,
) -> Result<Outcome, String> {
    let mut session = GameSession::start(catalog, config.clone()).map_err(|e| e.to_string())?;

    while let Some(question) = session.next_question().cloned() {
        let number = session.questions_asked() + 1;
        println!("\nQuestion {number}/{}", session.budget());
        println!("Remaining people: {}", session.candidates().len());

        loop {
            prompt(&format!("{question} "))?;
            let Some(input) = read_line(reader)? else {
                return Ok(Outcome::Stopped);
            };

            if input.eq_ignore_ascii_case("stop") {
                return Ok(Outcome::Stopped);
            }
            if input.eq_ignore_ascii_case("remaining") {
                print_people(session.candidates().people());
                continue;
            }

            match session.answer(&input) {
                Ok(_) => break,
                Err(e @ GameError::InputInvalid { .. }) => println!("{}", e.to_string().yellow()),
                Err(e) => return Err(e.to_string()),
            }
        }
    }

    report(&session);
    Ok(Outcome::Finished(session.transcript().clone()))
}

/// Rewrite `path` with every finished game so far, as a JSON array.
fn write_transcripts(path: &Path, games: &[Transcript]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(games).map_err(|e| e.to_string())?;
    fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}

fn report(session: &GameSession) {
    match session.status() {
        SessionStatus::Solved => {
            if let Some(person) = session.solution() {
                println!("\n  {}", "I've figured it out!".green().bold());
                println!("  The person is: {}!", person.name().bold());
                println!("  Guessed in {} questions.", session.questions_asked());
            }
        }
        SessionStatus::Exhausted(ExhaustReason::NoMatch) => {
            println!("\n  {}", "No one in the catalog matches those answers.".red());
        }
        SessionStatus::Exhausted(ExhaustReason::BudgetSpent) => {
            println!("\n  {}", "Out of questions! The remaining people are:".yellow());
            print_people(session.candidates().people());
        }
        SessionStatus::Exhausted(ExhaustReason::NoQuestionLeft) => {
            println!(
                "\n  {}",
                "I have no question left that tells these people apart:".yellow()
            );
            print_people(session.candidates().people());
        }
        SessionStatus::InProgress => {}
    }

    if !session.transcript().is_empty() {
        println!("\n  Questions asked:");
        for line in session.transcript().export_text().lines() {
            println!("  {line}");
        }
    }
}

fn print_people(people: &[Person]) {
    for person in people {
        println!("  - {person}");
    }
}

fn prompt(text: &str) -> Result<(), String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())
}

/// Read one trimmed line. `None` at end of input.
fn read_line(reader: &mut impl BufRead) -> Result<Option<String>, String> {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim().to_string())),
        Err(e) => Err(e.to_string()),
    }
}

/// Ask until the player answers Y or N. `None` at end of input.
fn ask_yes_no(reader: &mut impl BufRead, text: &str) -> Result<Option<bool>, String> {
    loop {
        prompt(text)?;
        let Some(input) = read_line(reader)? else {
            return Ok(None);
        };
        match input.to_uppercase().as_str() {
            "Y" => return Ok(Some(true)),
            "N" => return Ok(Some(false)),
            _ => println!("{}", "Please enter 'Y' for Yes or 'N' for No".yellow()),
        }
    }
}
