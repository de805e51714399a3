//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Phasmo - Deduction console for identifying ghosts from collected evidence.
#[derive(Debug, Parser)]
#[command(name = "phasmo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PHASMO_CONFIG")]
    pub config: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (possible ghosts only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Enter interactive REPL mode
    Repl,

    /// Evaluate a list of clues and print the deduction
    Evaluate(EvaluateArgs),

    /// Show notes for every ghost
    Ghosts,

    /// Show valid questions to ask the Ouija board
    Questions,

    /// About this program
    About,
}

/// Arguments for the evaluate command.
#[derive(Debug, Parser)]
pub struct EvaluateArgs {
    /// Clues found (e.g. `emf orbs`); prefix with '-' or '!' to discount (e.g. `-temp`)
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    pub clues: Vec<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["phasmo"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_evaluate_command_accepts_discounts() {
        let cli = Cli::parse_from(["phasmo", "evaluate", "emf", "-temp", "!orbs"]);
        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.clues, vec!["emf", "-temp", "!orbs"]);
            }
            _ => panic!("Expected Evaluate command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::parse_from(["phasmo", "--format", "json", "ghosts"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Some(Command::Ghosts)));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, crate::config::OutputFormat::Quiet));
    }
}
