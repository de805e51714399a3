//! Evidence module - what one session has observed and ruled out

use crate::category::Clue;
use std::collections::BTreeSet;
use std::fmt;

/// Found and discounted clues of a single session
///
/// The two sets are disjoint at all times. Every mutator that places a clue in
/// one set removes it from the other first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceState {
    found: BTreeSet<Clue>,
    discounted: BTreeSet<Clue>,
}

impl EvidenceState {
    /// Create an empty evidence state
    pub fn new() -> Self {
        Self::default()
    }

    /// Clues observed present
    pub fn found(&self) -> &BTreeSet<Clue> {
        &self.found
    }

    /// Clues manually ruled out
    pub fn discounted(&self) -> &BTreeSet<Clue> {
        &self.discounted
    }

    /// Check whether `clue` has been found
    pub fn is_found(&self, clue: &str) -> bool {
        self.found.contains(clue)
    }

    /// Check whether `clue` has been discounted
    pub fn is_discounted(&self, clue: &str) -> bool {
        self.discounted.contains(clue)
    }

    /// Check whether no evidence has been recorded
    pub fn is_empty(&self) -> bool {
        self.found.is_empty() && self.discounted.is_empty()
    }

    pub(crate) fn insert_found(&mut self, clue: Clue) {
        self.discounted.remove(&clue);
        self.found.insert(clue);
    }

    pub(crate) fn insert_discounted(&mut self, clue: Clue) {
        self.found.remove(&clue);
        self.discounted.insert(clue);
    }

    pub(crate) fn remove_found(&mut self, clue: &str) -> bool {
        self.found.remove(clue)
    }

    pub(crate) fn remove_discounted(&mut self, clue: &str) -> bool {
        self.discounted.remove(clue)
    }

    pub(crate) fn clear(&mut self) {
        self.found.clear();
        self.discounted.clear();
    }
}

/// Classification of a clue against the current evidence
///
/// Every clue of the relation falls in exactly one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueStatus {
    /// Observed present
    Found,

    /// Manually ruled out
    Discounted,

    /// Still producible by at least one possible suspect
    Remaining,

    /// Not producible by any possible suspect
    Impossible,
}

impl ClueStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClueStatus::Found => "found",
            ClueStatus::Discounted => "discounted",
            ClueStatus::Remaining => "remaining",
            ClueStatus::Impossible => "impossible",
        }
    }
}

impl fmt::Display for ClueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transition taken by [`Investigation::mark_found`](crate::Investigation::mark_found)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundOutcome {
    /// Clue added to the found set
    Added,

    /// Clue was discounted; the discount was lifted and the clue is now found
    AddedFromDiscounted,

    /// Clue was already found and has been removed
    Removed,
}

/// Transition taken by [`Investigation::discount`](crate::Investigation::discount)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountOutcome {
    /// Remaining clue added to the discounted set
    Discounted,

    /// Clue was found; it is now discounted instead
    DiscountedFromFound,

    /// Clue was discounted and is counted again
    Recounted,

    /// Clue is already impossible; nothing changed
    AlreadyImpossible,
}
