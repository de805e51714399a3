//! Phasmo CLI - Deduction console for identifying ghosts from evidence.

use clap::Parser;
use phasmo_cli::commands;
use phasmo_cli::repl;
use phasmo_cli::{AliasTable, Cli, Command, Config, Formatter};
use phasmo_domain::Investigation;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing (log to stderr so it never mixes with REPL output)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("PHASMO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> phasmo_cli::Result<()> {
    // Load or create config
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => {
            let cfg = Config::load().unwrap_or_else(|e| {
                tracing::warn!("Falling back to default configuration: {}", e);
                Config::default()
            });
            // First run: write the defaults so they can be edited
            if matches!(Config::path(), Ok(path) if !path.exists()) {
                if let Err(e) = cfg.save() {
                    tracing::warn!("Could not write default configuration: {}", e);
                }
            }
            cfg
        }
    };

    // Build the shared relation and the synonym table
    let relation = Arc::new(config.relation_table()?);
    let aliases = AliasTable::new(&relation).with_aliases(&config.aliases)?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled, config.settings.wrap_width);

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            let mut investigation = Investigation::new(relation);
            repl::run_repl(&mut investigation, &aliases, &config.settings, &formatter)?;
        }
        Some(Command::Evaluate(args)) => {
            commands::execute_evaluate(args, relation, &aliases, &formatter)?;
        }
        Some(Command::Ghosts) => {
            commands::execute_ghosts(&relation, &formatter)?;
        }
        Some(Command::Questions) => {
            commands::execute_questions(&formatter)?;
        }
        Some(Command::About) => {
            commands::execute_about(&formatter)?;
        }
    }

    Ok(())
}
