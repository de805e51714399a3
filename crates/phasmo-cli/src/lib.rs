//! Phasmo CLI library.
//!
//! This library provides the presentation layer for the Phasmo deduction
//! console: configuration, clue synonyms, ghost notes, command execution and
//! output formatting around the `phasmo-domain` engine.

pub mod aliases;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod lore;
pub mod output;
pub mod repl;

pub use aliases::AliasTable;
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
