//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::aliases::AliasTable;
use crate::commands::{self, evidence, ClueInput};
use crate::config::{Config, Settings};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use phasmo_domain::Investigation;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(
    investigation: &mut Investigation,
    aliases: &AliasTable,
    settings: &Settings,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info("Phasmo Deduction Console - Type 'help' for commands, 'exit' to quit")
    );
    println!();
    println!("{}", formatter.format_board(investigation)?);
    println!();
    println!("{}", formatter.format_clues(investigation)?);

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path();
    if let Some(path) = &history_path {
        let _ = editor.load_history(path);
    }

    loop {
        println!();
        let prompt = format!(
            "({}/{})> ",
            investigation.found().len(),
            settings.evidence_goal
        );

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line, aliases) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(investigation, aliases, formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, investigation, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    if let Some(path) = &history_path {
        if let Err(e) = editor.save_history(path) {
            tracing::warn!("Failed to save history to {}: {}", path.display(), e);
        }
    }

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Reset,
    Info,
    Clues,
    Ghosts,
    Questions,
    About,
    Clue(ClueInput),
}

/// Parse a REPL command line.
///
/// Clue names take priority over keywords, so a custom relation may use any
/// name for its clues.
fn parse_repl_command(line: &str, aliases: &AliasTable) -> Result<ReplCommand> {
    let line = line.trim();

    if line.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    if evidence::is_negated(line) {
        return Ok(ReplCommand::Clue(commands::parse_clue_token(line, aliases)?));
    }

    if let Ok(clue) = aliases.resolve(line) {
        return Ok(ReplCommand::Clue(ClueInput::Found(clue)));
    }

    match line.to_lowercase().as_str() {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "reset" => Ok(ReplCommand::Reset),
        "info" => Ok(ReplCommand::Info),
        "clues" => Ok(ReplCommand::Clues),
        "ghosts" | "quirks" => Ok(ReplCommand::Ghosts),
        "questions" => Ok(ReplCommand::Questions),
        "about" => Ok(ReplCommand::About),
        _ => Err(CliError::UnknownCommand(line.to_string())),
    }
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: ReplCommand,
    investigation: &mut Investigation,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Clue(input) => commands::execute_clue(input, investigation, formatter)?,
        ReplCommand::Reset => commands::execute_reset(investigation, formatter)?,
        ReplCommand::Info => println!("{}", formatter.format_board(investigation)?),
        ReplCommand::Clues => println!("{}", formatter.format_clues(investigation)?),
        ReplCommand::Ghosts => commands::execute_possible_ghosts(investigation, formatter)?,
        ReplCommand::Questions => commands::execute_questions(formatter)?,
        ReplCommand::About => commands::execute_about(formatter)?,
        ReplCommand::Exit | ReplCommand::Help => {}
    }

    Ok(())
}

fn get_history_path() -> Option<PathBuf> {
    match Config::dir().and_then(|dir| {
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join("history.txt"))
    }) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::warn!("History disabled: {}", e);
            None
        }
    }
}

fn print_help(investigation: &Investigation, aliases: &AliasTable, formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <clue>          - Mark a clue as found (enter it again to remove it)");
    println!("  -<clue>         - Discount a clue (enter it again to count it again)");
    println!("  reset           - Remove all clues");
    println!("  info            - Show remaining <ghost, clue> pairs");
    println!("  clues           - Show remaining/entered/impossible clues");
    println!("  ghosts          - Show traits of remaining ghosts");
    println!("  questions       - Show valid questions to ask the Ouija board");
    println!("  about           - About this program");
    println!("  help, ?         - Show this help");
    println!("  exit, quit, q   - Exit REPL");
    println!();
    println!("{}", formatter.info("Clues:"));
    for clue in investigation.relation().all_clues() {
        let synonyms = aliases.synonyms_for(&clue);
        if synonyms.is_empty() {
            println!("  {}", clue);
        } else {
            println!("  {:<8} ({})", clue.as_str(), synonyms.join(", "));
        }
    }
}
