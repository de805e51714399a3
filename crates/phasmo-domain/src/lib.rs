//! Phasmo Domain Layer
//!
//! This crate contains the deduction engine behind the Phasmo console. It
//! knows nothing about terminals, configuration files or command syntax; it
//! only evaluates evidence against a fixed clue/suspect relation.
//!
//! ## Key Concepts
//!
//! - **Clue**: an observable evidence type (EMF level 5, freezing temperatures, ...)
//! - **Suspect**: an identifiable target type (a ghost)
//! - **Relation Table**: which suspects can produce which clues, plus its transpose
//! - **Evidence State**: the clues found and the clues discounted in one session
//! - **Investigation**: a session owning evidence and answering consistency queries
//!
//! ## Architecture
//!
//! - Pure in-memory set algebra, no I/O
//! - The relation table is immutable and shared between sessions
//! - Each investigation owns its evidence exclusively
//! - Presentation (sorting, wrapping, colors) lives in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod error;
pub mod evidence;
pub mod investigation;
pub mod relation;

// Re-exports for convenience
pub use category::{Clue, Suspect};
pub use error::{DomainError, Result};
pub use evidence::{ClueStatus, DiscountOutcome, EvidenceState, FoundOutcome};
pub use investigation::Investigation;
pub use relation::RelationTable;
