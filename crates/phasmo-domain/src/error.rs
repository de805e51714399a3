//! Error types for the deduction engine.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Domain errors.
///
/// Only `InvalidClue` can come out of a running session. `MalformedRelation`
/// describes a defective relation table and surfaces while it is being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Clue identifier (or synonym) outside the relation's clue domain
    #[error("Invalid clue: {0}")]
    InvalidClue(String),

    /// Relation table that cannot be used for deduction
    #[error("Malformed relation: {0}")]
    MalformedRelation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(error: &DomainError) -> &'static str {
        match error {
            DomainError::InvalidClue(_) => "invalid clue",
            DomainError::MalformedRelation(_) => "malformed relation",
        }
    }

    #[test]
    fn test_error_display() {
        let invalid = DomainError::InvalidClue("salt".to_string());
        assert_eq!(kind(&invalid), "invalid clue");
        assert_eq!(invalid.to_string(), "Invalid clue: salt");

        let malformed = DomainError::MalformedRelation("empty table".to_string());
        assert_eq!(kind(&malformed), "malformed relation");
        assert_eq!(malformed.to_string(), "Malformed relation: empty table");
    }
}
