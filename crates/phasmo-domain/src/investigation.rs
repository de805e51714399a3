//! Investigation module - a deduction session over a relation table
//!
//! Every query is recomputed from the relation and the current evidence. The
//! domains are a handful of elements, so nothing is cached.

use crate::category::{Clue, Suspect};
use crate::error::{DomainError, Result};
use crate::evidence::{ClueStatus, DiscountOutcome, EvidenceState, FoundOutcome};
use crate::relation::RelationTable;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// A single deduction session
///
/// Owns its [`EvidenceState`] exclusively; the relation table is shared.
///
/// # Examples
///
/// ```
/// use phasmo_domain::{Clue, Investigation, RelationTable};
/// use std::sync::Arc;
///
/// let mut investigation = Investigation::new(Arc::new(RelationTable::reference()));
/// investigation.mark_found(&Clue::new("emf")).unwrap();
/// investigation.discount(&Clue::new("temp")).unwrap();
///
/// let names: Vec<String> = investigation
///     .possible_suspects()
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(names, vec!["jinn", "oni", "revenant", "shade"]);
/// ```
#[derive(Debug, Clone)]
pub struct Investigation {
    relation: Arc<RelationTable>,
    evidence: EvidenceState,
}

impl Investigation {
    /// Start a session with no evidence
    pub fn new(relation: Arc<RelationTable>) -> Self {
        Self {
            relation,
            evidence: EvidenceState::new(),
        }
    }

    /// Relation table this session evaluates against
    pub fn relation(&self) -> &RelationTable {
        &self.relation
    }

    /// Current evidence
    pub fn evidence(&self) -> &EvidenceState {
        &self.evidence
    }

    /// Clues observed present
    pub fn found(&self) -> &BTreeSet<Clue> {
        self.evidence.found()
    }

    /// Clues manually ruled out
    pub fn discounted(&self) -> &BTreeSet<Clue> {
        self.evidence.discounted()
    }

    /// Toggle `clue` as found
    ///
    /// A discounted clue is recounted and becomes found. A clue that is
    /// already found is removed, so submitting the same clue twice clears it.
    ///
    /// # Errors
    /// Returns `InvalidClue` if `clue` is not in the relation; the evidence is
    /// left unchanged.
    pub fn mark_found(&mut self, clue: &Clue) -> Result<FoundOutcome> {
        self.validate(clue)?;

        let outcome = if self.evidence.is_found(clue.as_str()) {
            self.evidence.remove_found(clue.as_str());
            FoundOutcome::Removed
        } else if self.evidence.is_discounted(clue.as_str()) {
            self.evidence.insert_found(clue.clone());
            FoundOutcome::AddedFromDiscounted
        } else {
            self.evidence.insert_found(clue.clone());
            FoundOutcome::Added
        };

        Ok(outcome)
    }

    /// Toggle `clue` as discounted
    ///
    /// A found clue is moved to the discounted set, a discounted clue is
    /// recounted, and a remaining clue is discounted. Discounting a clue that
    /// is already impossible changes nothing.
    ///
    /// # Errors
    /// Returns `InvalidClue` if `clue` is not in the relation; the evidence is
    /// left unchanged.
    pub fn discount(&mut self, clue: &Clue) -> Result<DiscountOutcome> {
        self.validate(clue)?;

        let outcome = if self.evidence.is_found(clue.as_str()) {
            self.evidence.insert_discounted(clue.clone());
            DiscountOutcome::DiscountedFromFound
        } else if self.evidence.is_discounted(clue.as_str()) {
            self.evidence.remove_discounted(clue.as_str());
            DiscountOutcome::Recounted
        } else if self.remaining_clues().contains(clue) {
            self.evidence.insert_discounted(clue.clone());
            DiscountOutcome::Discounted
        } else {
            DiscountOutcome::AlreadyImpossible
        };

        Ok(outcome)
    }

    /// Forget all found and discounted clues
    pub fn reset(&mut self) {
        self.evidence.clear();
    }

    /// Suspects consistent with the evidence
    ///
    /// Starts from the full suspect domain, keeps only suspects producing every
    /// found clue, and drops suspects producing any discounted clue.
    pub fn possible_suspects(&self) -> BTreeSet<Suspect> {
        let mut possible = self.relation.all_suspects();

        for clue in self.evidence.found() {
            if let Some(suspects) = self.relation.suspects_for(clue.as_str()) {
                possible.retain(|s| suspects.contains(s));
            }
        }

        for clue in self.evidence.discounted() {
            if let Some(suspects) = self.relation.suspects_for(clue.as_str()) {
                possible.retain(|s| !suspects.contains(s));
            }
        }

        possible
    }

    /// Clues each possible suspect could still produce
    ///
    /// An empty set marks a confirmed suspect.
    pub fn remaining_clues_per_suspect(&self) -> BTreeMap<Suspect, BTreeSet<Clue>> {
        let found = self.evidence.found();

        self.possible_suspects()
            .into_iter()
            .map(|suspect| {
                let remaining: BTreeSet<Clue> = self
                    .relation
                    .clues_for(suspect.as_str())
                    .map(|clues| clues.difference(found).cloned().collect())
                    .unwrap_or_default();
                (suspect, remaining)
            })
            .collect()
    }

    /// Clues still worth looking for
    pub fn remaining_clues(&self) -> BTreeSet<Clue> {
        self.remaining_clues_per_suspect()
            .into_values()
            .flatten()
            .collect()
    }

    /// Clues no possible suspect can produce, excluding found and discounted ones
    pub fn impossible_clues(&self) -> BTreeSet<Clue> {
        let remaining = self.remaining_clues();

        self.relation
            .all_clues()
            .into_iter()
            .filter(|c| {
                !remaining.contains(c)
                    && !self.evidence.is_found(c.as_str())
                    && !self.evidence.is_discounted(c.as_str())
            })
            .collect()
    }

    /// Possible suspects with every producible clue already found
    pub fn confirmed_suspects(&self) -> BTreeSet<Suspect> {
        self.remaining_clues_per_suspect()
            .into_iter()
            .filter(|(_, remaining)| remaining.is_empty())
            .map(|(suspect, _)| suspect)
            .collect()
    }

    /// Classify `clue` against the current evidence
    ///
    /// # Errors
    /// Returns `InvalidClue` if `clue` is not in the relation.
    pub fn clue_status(&self, clue: &Clue) -> Result<ClueStatus> {
        self.validate(clue)?;

        let status = if self.evidence.is_found(clue.as_str()) {
            ClueStatus::Found
        } else if self.evidence.is_discounted(clue.as_str()) {
            ClueStatus::Discounted
        } else if self.remaining_clues().contains(clue) {
            ClueStatus::Remaining
        } else {
            ClueStatus::Impossible
        };

        Ok(status)
    }

    fn validate(&self, clue: &Clue) -> Result<()> {
        if self.relation.contains_clue(clue.as_str()) {
            Ok(())
        } else {
            Err(DomainError::InvalidClue(clue.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Investigation {
        Investigation::new(Arc::new(RelationTable::reference()))
    }

    fn names<T: ToString>(set: &BTreeSet<T>) -> Vec<String> {
        set.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_fresh_session_allows_every_suspect() {
        let investigation = reference();
        assert_eq!(investigation.possible_suspects().len(), 12);
        assert_eq!(investigation.remaining_clues().len(), 6);
        assert!(investigation.impossible_clues().is_empty());
        assert!(investigation.confirmed_suspects().is_empty());
    }

    #[test]
    fn test_found_clue_narrows_suspects() {
        let mut investigation = reference();
        let outcome = investigation.mark_found(&Clue::new("emf")).unwrap();
        assert_eq!(outcome, FoundOutcome::Added);
        assert_eq!(
            names(&investigation.possible_suspects()),
            vec!["banshee", "jinn", "oni", "phantom", "revenant", "shade"]
        );
    }

    #[test]
    fn test_discount_removes_linked_suspects() {
        let mut investigation = reference();
        investigation.mark_found(&Clue::new("emf")).unwrap();
        let outcome = investigation.discount(&Clue::new("temp")).unwrap();
        assert_eq!(outcome, DiscountOutcome::Discounted);
        assert_eq!(
            names(&investigation.possible_suspects()),
            vec!["jinn", "oni", "revenant", "shade"]
        );
    }

    #[test]
    fn test_mark_found_twice_removes_clue() {
        let mut investigation = reference();
        let emf = Clue::new("emf");
        investigation.mark_found(&emf).unwrap();
        assert_eq!(investigation.mark_found(&emf).unwrap(), FoundOutcome::Removed);
        assert!(investigation.found().is_empty());
        assert_eq!(investigation.possible_suspects().len(), 12);
    }

    #[test]
    fn test_mark_found_recounts_discounted_clue() {
        let mut investigation = reference();
        let orbs = Clue::new("orbs");
        investigation.discount(&orbs).unwrap();
        assert_eq!(
            investigation.mark_found(&orbs).unwrap(),
            FoundOutcome::AddedFromDiscounted
        );
        assert!(investigation.found().contains(&orbs));
        assert!(investigation.discounted().is_empty());
    }

    #[test]
    fn test_discount_found_clue() {
        let mut investigation = reference();
        let book = Clue::new("book");
        investigation.mark_found(&book).unwrap();
        assert_eq!(
            investigation.discount(&book).unwrap(),
            DiscountOutcome::DiscountedFromFound
        );
        assert!(investigation.found().is_empty());
        assert!(investigation.discounted().contains(&book));
    }

    #[test]
    fn test_discount_twice_recounts() {
        let mut investigation = reference();
        let prints = Clue::new("prints");
        investigation.discount(&prints).unwrap();
        assert_eq!(
            investigation.discount(&prints).unwrap(),
            DiscountOutcome::Recounted
        );
        assert!(investigation.evidence().is_empty());
    }

    #[test]
    fn test_discount_impossible_clue_is_noop() {
        let mut investigation = reference();
        investigation.mark_found(&Clue::new("emf")).unwrap();
        investigation.mark_found(&Clue::new("temp")).unwrap();
        // Only phantom and banshee remain; neither leaves spirit box evidence
        let before = investigation.evidence().clone();
        assert_eq!(
            investigation.discount(&Clue::new("box")).unwrap(),
            DiscountOutcome::AlreadyImpossible
        );
        assert_eq!(investigation.evidence(), &before);
    }

    #[test]
    fn test_invalid_clue_leaves_state_unchanged() {
        let mut investigation = reference();
        investigation.mark_found(&Clue::new("orbs")).unwrap();
        let before = investigation.evidence().clone();

        let salt = Clue::new("salt");
        assert_eq!(
            investigation.mark_found(&salt),
            Err(DomainError::InvalidClue("salt".to_string()))
        );
        assert!(investigation.discount(&salt).is_err());
        assert!(investigation.clue_status(&salt).is_err());
        assert_eq!(investigation.evidence(), &before);
    }

    #[test]
    fn test_reset() {
        let mut investigation = reference();
        investigation.mark_found(&Clue::new("emf")).unwrap();
        investigation.discount(&Clue::new("book")).unwrap();

        investigation.reset();
        assert!(investigation.found().is_empty());
        assert!(investigation.discounted().is_empty());
        assert_eq!(
            investigation.possible_suspects(),
            investigation.relation().all_suspects()
        );
    }

    #[test]
    fn test_three_clues_confirm_one_ghost() {
        let mut investigation = reference();
        for clue in ["emf", "temp", "orbs"] {
            investigation.mark_found(&Clue::new(clue)).unwrap();
        }
        assert_eq!(names(&investigation.possible_suspects()), vec!["phantom"]);
        assert_eq!(names(&investigation.confirmed_suspects()), vec!["phantom"]);
        assert!(investigation.remaining_clues().is_empty());
        assert_eq!(investigation.impossible_clues().len(), 3);
    }

    #[test]
    fn test_confirmed_suspect_in_custom_relation() {
        let relation = RelationTable::from_entries([
            ("a", vec!["s", "t"]),
            ("b", vec!["s", "u"]),
            ("c", vec!["t", "u"]),
        ])
        .unwrap();
        let mut investigation = Investigation::new(Arc::new(relation));
        investigation.mark_found(&Clue::new("a")).unwrap();
        investigation.mark_found(&Clue::new("b")).unwrap();

        let s = Suspect::new("s");
        assert!(investigation.possible_suspects().contains(&s));
        let per_suspect = investigation.remaining_clues_per_suspect();
        assert_eq!(per_suspect.get(&s), Some(&BTreeSet::new()));
        assert!(investigation.confirmed_suspects().contains(&s));
    }

    #[test]
    fn test_clue_status_classification() {
        let mut investigation = reference();
        investigation.mark_found(&Clue::new("emf")).unwrap();
        investigation.mark_found(&Clue::new("temp")).unwrap();
        investigation.discount(&Clue::new("orbs")).unwrap();

        // banshee is the only ghost left
        let status = |name: &str| investigation.clue_status(&Clue::new(name)).unwrap();
        assert_eq!(status("emf"), ClueStatus::Found);
        assert_eq!(status("orbs"), ClueStatus::Discounted);
        assert_eq!(status("prints"), ClueStatus::Remaining);
        assert_eq!(status("box"), ClueStatus::Impossible);
        assert_eq!(status("book"), ClueStatus::Impossible);
    }

    #[test]
    fn test_contradicting_evidence_leaves_no_suspects() {
        let mut investigation = reference();
        for clue in ["emf", "temp", "box"] {
            investigation.mark_found(&Clue::new(clue)).unwrap();
        }
        assert!(investigation.possible_suspects().is_empty());
        assert!(investigation.remaining_clues().is_empty());
        assert_eq!(investigation.impossible_clues().len(), 3);
    }

    #[test]
    fn test_sessions_are_independent() {
        let relation = Arc::new(RelationTable::reference());
        let mut first = Investigation::new(Arc::clone(&relation));
        let second = Investigation::new(relation);

        first.mark_found(&Clue::new("book")).unwrap();
        assert_eq!(first.found().len(), 1);
        assert!(second.found().is_empty());
    }
}
