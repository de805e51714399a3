//! Evaluate command implementation.

use crate::aliases::AliasTable;
use crate::cli::EvaluateArgs;
use crate::commands::evidence::{apply_clue, parse_clue_token};
use crate::error::Result;
use crate::output::Formatter;
use phasmo_domain::{Investigation, RelationTable};
use std::sync::Arc;

/// Execute the evaluate command.
pub fn execute_evaluate(
    args: EvaluateArgs,
    relation: Arc<RelationTable>,
    aliases: &AliasTable,
    formatter: &Formatter,
) -> Result<()> {
    let investigation = evaluate_tokens(&args.clues, relation, aliases, formatter)?;
    println!("{}", formatter.format_report(&investigation)?);
    Ok(())
}

/// Apply clue tokens in order to a fresh investigation.
///
/// Tokens toggle exactly as they do in the REPL, so a repeated clue cancels out.
pub fn evaluate_tokens(
    tokens: &[String],
    relation: Arc<RelationTable>,
    aliases: &AliasTable,
    formatter: &Formatter,
) -> Result<Investigation> {
    let mut investigation = Investigation::new(relation);

    for token in tokens {
        let input = parse_clue_token(token, aliases)?;
        let message = apply_clue(&input, &mut investigation, formatter)?;
        tracing::debug!("{}", message);
    }

    Ok(investigation)
}
