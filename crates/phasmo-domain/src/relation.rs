//! Relation module - the static clue/suspect table
//!
//! The forward relation maps each clue to the suspects that can produce it.
//! The inverse relation is derived from it by transposition and is never
//! edited on its own.

use crate::category::{Clue, Suspect};
use crate::error::{DomainError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Reference relation for Phasmophobia v0.174 (10/25/2020).
const REFERENCE_RELATION: &[(&str, &[&str])] = &[
    ("emf", &["shade", "phantom", "jinn", "banshee", "revenant", "oni"]),
    ("temp", &["phantom", "yurei", "mare", "demon", "banshee", "wraith"]),
    (
        "box",
        &["jinn", "mare", "demon", "oni", "poltergeist", "spirit", "wraith"],
    ),
    ("prints", &["banshee", "revenant", "poltergeist", "spirit", "wraith"]),
    ("orbs", &["phantom", "shade", "jinn", "yurei", "mare", "poltergeist"]),
    ("book", &["shade", "yurei", "demon", "revenant", "oni", "spirit"]),
];

/// Immutable bipartite relation between clues and suspects
///
/// Built once at startup and shared read-only between sessions.
///
/// # Examples
///
/// ```
/// use phasmo_domain::RelationTable;
///
/// let table = RelationTable::reference();
/// assert_eq!(table.all_clues().len(), 6);
/// assert_eq!(table.all_suspects().len(), 12);
/// assert!(table.is_transpose());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTable {
    forward: BTreeMap<Clue, BTreeSet<Suspect>>,
    inverse: BTreeMap<Suspect, BTreeSet<Clue>>,
}

impl RelationTable {
    /// Build the reference 6-clue / 12-suspect relation
    pub fn reference() -> Self {
        let forward = REFERENCE_RELATION
            .iter()
            .map(|(clue, suspects)| {
                (
                    Clue::from(*clue),
                    suspects.iter().copied().map(Suspect::from).collect(),
                )
            })
            .collect();
        Self::from_forward(forward)
    }

    /// Build a relation from `(clue, suspects)` entries
    ///
    /// # Errors
    /// Returns `MalformedRelation` if the table is empty, if a name is empty,
    /// if a clue appears twice, or if a clue maps to no suspects.
    ///
    /// # Examples
    ///
    /// ```
    /// use phasmo_domain::RelationTable;
    ///
    /// let table = RelationTable::from_entries([
    ///     ("a", vec!["s", "t"]),
    ///     ("b", vec!["s"]),
    /// ]).unwrap();
    /// assert_eq!(table.clues_for("s").map(|c| c.len()), Some(2));
    /// ```
    pub fn from_entries<I, C, T, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<Clue>,
        T: IntoIterator<Item = S>,
        S: Into<Suspect>,
    {
        let mut forward: BTreeMap<Clue, BTreeSet<Suspect>> = BTreeMap::new();

        for (clue, suspects) in entries {
            let clue = clue.into();
            if clue.as_str().is_empty() {
                return Err(DomainError::MalformedRelation(
                    "clue name cannot be empty".to_string(),
                ));
            }
            if forward.contains_key(&clue) {
                return Err(DomainError::MalformedRelation(format!(
                    "clue '{}' is listed more than once",
                    clue
                )));
            }

            let suspects: BTreeSet<Suspect> = suspects.into_iter().map(Into::into).collect();
            if suspects.is_empty() {
                return Err(DomainError::MalformedRelation(format!(
                    "clue '{}' maps to no suspects",
                    clue
                )));
            }
            if suspects.iter().any(|s| s.as_str().is_empty()) {
                return Err(DomainError::MalformedRelation(format!(
                    "clue '{}' lists an empty suspect name",
                    clue
                )));
            }

            forward.insert(clue, suspects);
        }

        if forward.is_empty() {
            return Err(DomainError::MalformedRelation(
                "relation has no clues".to_string(),
            ));
        }

        Ok(Self::from_forward(forward))
    }

    fn from_forward(forward: BTreeMap<Clue, BTreeSet<Suspect>>) -> Self {
        let mut inverse: BTreeMap<Suspect, BTreeSet<Clue>> = BTreeMap::new();
        for (clue, suspects) in &forward {
            for suspect in suspects {
                inverse
                    .entry(suspect.clone())
                    .or_default()
                    .insert(clue.clone());
            }
        }

        let table = Self { forward, inverse };
        debug_assert!(table.is_transpose(), "inverse relation must transpose forward");
        table
    }

    /// Full clue domain
    pub fn all_clues(&self) -> BTreeSet<Clue> {
        self.forward.keys().cloned().collect()
    }

    /// Full suspect domain
    pub fn all_suspects(&self) -> BTreeSet<Suspect> {
        self.inverse.keys().cloned().collect()
    }

    /// Suspects consistent with `clue` being present
    pub fn suspects_for(&self, clue: &str) -> Option<&BTreeSet<Suspect>> {
        self.forward.get(clue)
    }

    /// Clues `suspect` can produce
    pub fn clues_for(&self, suspect: &str) -> Option<&BTreeSet<Clue>> {
        self.inverse.get(suspect)
    }

    /// Check whether `clue` belongs to the clue domain
    pub fn contains_clue(&self, clue: &str) -> bool {
        self.forward.contains_key(clue)
    }

    /// Check whether `suspect` belongs to the suspect domain
    pub fn contains_suspect(&self, suspect: &str) -> bool {
        self.inverse.contains_key(suspect)
    }

    /// Forward relation (clue -> suspects)
    pub fn forward(&self) -> &BTreeMap<Clue, BTreeSet<Suspect>> {
        &self.forward
    }

    /// Inverse relation (suspect -> clues)
    pub fn inverse(&self) -> &BTreeMap<Suspect, BTreeSet<Clue>> {
        &self.inverse
    }

    /// Check that the inverse is exactly the transpose of the forward relation
    pub fn is_transpose(&self) -> bool {
        let forward_in_inverse = self.forward.iter().all(|(clue, suspects)| {
            suspects.iter().all(|s| {
                self.inverse
                    .get(s)
                    .is_some_and(|clues| clues.contains(clue))
            })
        });

        let inverse_in_forward = self.inverse.iter().all(|(suspect, clues)| {
            !clues.is_empty()
                && clues.iter().all(|c| {
                    self.forward
                        .get(c)
                        .is_some_and(|suspects| suspects.contains(suspect))
                })
        });

        forward_in_inverse && inverse_in_forward
    }
}

impl Default for RelationTable {
    fn default() -> Self {
        Self::reference()
    }
}
