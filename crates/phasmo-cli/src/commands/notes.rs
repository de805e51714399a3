//! Ghost notes, questions and about commands.

use crate::error::Result;
use crate::output::Formatter;
use phasmo_domain::{Investigation, RelationTable};

/// Show notes for the ghosts still possible in `investigation`.
pub fn execute_possible_ghosts(investigation: &Investigation, formatter: &Formatter) -> Result<()> {
    let ghosts = investigation.remaining_clues_per_suspect();
    println!("{}", formatter.format_ghost_notes(&ghosts)?);
    Ok(())
}

/// Show notes for every ghost in the relation.
pub fn execute_ghosts(relation: &RelationTable, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_ghost_notes(relation.inverse())?);
    Ok(())
}

/// Show valid questions to ask the Ouija board.
pub fn execute_questions(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_questions());
    Ok(())
}

/// Show information about this program.
pub fn execute_about(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_about());
    Ok(())
}
