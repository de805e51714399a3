//! Evidence command implementation (found, discount, reset).

use crate::aliases::AliasTable;
use crate::error::Result;
use crate::output::Formatter;
use phasmo_domain::{Clue, Investigation};

/// Markers that turn a clue token into a discount.
const NEGATION_MARKERS: &[char] = &['-', '!'];

/// A clue token after synonym resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueInput {
    /// Toggle the clue as found
    Found(Clue),
    /// Toggle the clue as discounted
    Discount(Clue),
}

/// Parse a clue token such as `emf`, `-temp` or `!spirit box`.
///
/// # Errors
/// Returns `InvalidClue` if the name does not resolve to a clue.
pub fn parse_clue_token(token: &str, aliases: &AliasTable) -> Result<ClueInput> {
    let token = token.trim();
    match token.strip_prefix(NEGATION_MARKERS) {
        Some(name) => Ok(ClueInput::Discount(aliases.resolve(name)?)),
        None => Ok(ClueInput::Found(aliases.resolve(token)?)),
    }
}

/// Check whether a token carries a negation marker.
pub fn is_negated(token: &str) -> bool {
    token.trim_start().starts_with(NEGATION_MARKERS)
}

/// Apply a clue input and return the message describing the transition.
pub fn apply_clue(
    input: &ClueInput,
    investigation: &mut Investigation,
    formatter: &Formatter,
) -> Result<String> {
    let message = match input {
        ClueInput::Found(clue) => {
            let outcome = investigation.mark_found(clue)?;
            tracing::debug!("Marked '{}' found: {:?}", clue, outcome);
            formatter.found_message(clue, outcome)
        }
        ClueInput::Discount(clue) => {
            let outcome = investigation.discount(clue)?;
            tracing::debug!("Discounted '{}': {:?}", clue, outcome);
            formatter.discount_message(clue, outcome)
        }
    };

    Ok(message)
}

/// Apply a clue input and render the updated deduction below its message.
///
/// When the evidence rules out every ghost the board is replaced by a
/// warning, but the clue summary is still shown so the conflict can be found.
pub fn render_clue(
    input: &ClueInput,
    investigation: &mut Investigation,
    formatter: &Formatter,
) -> Result<String> {
    let mut sections = vec![apply_clue(input, investigation, formatter)?];

    if investigation.possible_suspects().is_empty() {
        sections.push(
            formatter.warning("No ghost matches this evidence. Check your clues or 'reset'."),
        );
    } else {
        sections.push(formatter.format_board(investigation)?);
        sections.push(String::new());
    }
    sections.push(formatter.format_clues(investigation)?);

    Ok(sections.join("\n"))
}

/// Execute a found/discount toggle and print the updated deduction.
pub fn execute_clue(
    input: ClueInput,
    investigation: &mut Investigation,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_clue(&input, investigation, formatter)?);
    Ok(())
}

/// Execute the reset command.
pub fn execute_reset(investigation: &mut Investigation, formatter: &Formatter) -> Result<()> {
    investigation.reset();
    tracing::debug!("Evidence reset");
    println!("{}", formatter.success("All clues removed."));
    Ok(())
}
